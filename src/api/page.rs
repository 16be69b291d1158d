//! 章节页面抓取模块

use anyhow::Result;
use tracing::debug;

use crate::error::AppError;

/// 抓取章节页面的 HTML
///
/// 任何网络错误都直接向上传播并终止运行，没有重试。
pub async fn fetch_chapter(url: &str) -> Result<String> {
    debug!("抓取章节页面: {}", url);

    let body = reqwest::get(url)
        .await
        .map_err(|e| AppError::fetch_failed(url, e))?
        .text()
        .await
        .map_err(|e| AppError::fetch_failed(url, e))?;

    debug!("页面抓取成功，{} 字节", body.len());

    Ok(body)
}
