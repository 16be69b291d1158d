//! 核心业务处理模块
//!
//! 负责单个章节的抓取、解析、回答生成与写出流程

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::llm::LlmClient;
use crate::api::page;
use crate::config::Config;
use crate::extract;
use crate::models::Question;

/// 问答块之间的分隔线长度
const SEPARATOR_LEN: usize = 100;

/// 处理单个章节
///
/// # 参数
/// - `llm`: LLM 客户端
/// - `url`: 章节页面 URL
/// - `chapter_index`: 章节序号（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回是否写出了章节文件（true=已写出，false=因数量不匹配跳过）。
/// 生成回答中途失败时错误直接向上传播，磁盘上会留下写到一半的文件。
pub async fn process_chapter(
    llm: &LlmClient,
    url: &str,
    chapter_index: usize,
    config: &Config,
) -> Result<bool> {
    // 1. 抓取并解析章节页面
    let markup = page::fetch_chapter(url).await?;
    let extracted = extract::extract(&markup)?;

    // 2. 难度与题目数量不一致时跳过该章节，本章题目不会带入下一章
    if !extracted.is_consistent() {
        warn!(
            "[章节 {}] ⚠️ 难度与题目数量不匹配 ({} / {})，跳过: {}",
            chapter_index,
            extracted.difficulty_levels.len(),
            extracted.questions.len(),
            url
        );
        return Ok(false);
    }

    // 3. 推导章节编号并准备输出文件
    let chap_number = extract::chapter_id(url)?;
    let questions = extracted.records();
    log_chapter_start(chapter_index, &chap_number, questions.len());

    let output_path = chapter_file_path(&config.output_dir, &chap_number);
    let file = File::create(&output_path)
        .with_context(|| format!("无法创建章节文件: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    // 4. 为每道题生成回答并依次写出
    write_count_line(&mut writer, questions.len())
        .with_context(|| format!("写入章节文件失败: {}", output_path.display()))?;

    for (i, question) in questions.iter().enumerate() {
        log_question_start(chapter_index, i + 1, questions.len(), question);

        let tagged = question.tagged();
        let answer = llm.answer_question(&tagged).await?;

        write_question_block(&mut writer, i + 1, &tagged, &answer)
            .with_context(|| format!("写入章节文件失败: {}", output_path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("写入章节文件失败: {}", output_path.display()))?;

    log_chapter_complete(chapter_index, &output_path);

    Ok(true)
}

/// 章节输出文件路径，形如 `<output_dir>/chp8.2.1.txt`
fn chapter_file_path(output_dir: &str, chap_number: &str) -> PathBuf {
    Path::new(output_dir).join(format!("chp{}.txt", chap_number))
}

/// 写入题目数量行
fn write_count_line<W: Write>(writer: &mut W, count: usize) -> std::io::Result<()> {
    writeln!(writer, "Number of Questions: {}", count)
}

/// 写入单个问答块
fn write_question_block<W: Write>(
    writer: &mut W,
    index: usize,
    tagged_question: &str,
    answer: &str,
) -> std::io::Result<()> {
    writeln!(writer, "Question: {} {}", index, tagged_question)?;
    writeln!(writer, "Answer:")?;
    writeln!(writer, "{}", answer)?;
    writeln!(writer, "{}", "=".repeat(SEPARATOR_LEN))
}

// ========== 日志辅助函数 ==========

fn log_chapter_start(chapter_index: usize, chap_number: &str, question_count: usize) {
    info!("[章节 {}] 编号: {}", chapter_index, chap_number);
    info!("[章节 {}] 题目总数: {}", chapter_index, question_count);
}

fn log_question_start(chapter_index: usize, question_index: usize, total: usize, question: &Question) {
    let preview = if question.text.chars().count() > 80 {
        question.text.chars().take(80).collect::<String>() + "..."
    } else {
        question.text.clone()
    };
    info!(
        "[章节 {}] 处理第 {}/{} 道题目 [{}] {}",
        chapter_index,
        question_index,
        total,
        question.difficulty.tag(),
        preview
    );
}

fn log_chapter_complete(chapter_index: usize, output_path: &Path) {
    info!(
        "[章节 {}] ✅ 章节文件已写出: {}\n",
        chapter_index,
        output_path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract;

    #[test]
    fn chapter_file_path_uses_chapter_number() {
        let path = chapter_file_path("out", "8.2.1");
        assert_eq!(path, Path::new("out").join("chp8.2.1.txt"));
    }

    #[test]
    fn question_block_format() {
        let mut out = Vec::new();
        write_question_block(&mut out, 3, "[H] Why?", "Because.").unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = format!("Question: 3 [H] Why?\nAnswer:\nBecause.\n{}\n", "=".repeat(100));
        assert_eq!(text, expected);
    }

    #[test]
    fn renders_extracted_chapter_with_duplicates_dropped() {
        // 模拟页面：Q1 重复出现，只写出两个问答块
        let markup = "<html><body><ol>\
             <li>[E] Q1</li>\
             <li>[H] Q2</li>\
             <li>[E] Q1</li>\
             </ol></body></html>";
        let extracted = extract::extract(markup).unwrap();
        assert!(extracted.is_consistent());

        let questions = extracted.records();
        assert_eq!(questions.len(), 2);

        let mut out = Vec::new();
        write_count_line(&mut out, questions.len()).unwrap();
        for (i, question) in questions.iter().enumerate() {
            write_question_block(&mut out, i + 1, &question.tagged(), "answer").unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Number of Questions: 2\n"));
        assert!(text.contains("Question: 1 [E] Q1\nAnswer:\nanswer\n"));
        assert!(text.contains("Question: 2 [H] Q2\nAnswer:\nanswer\n"));
        assert_eq!(text.matches(&"=".repeat(100)).count(), 2);
    }
}
