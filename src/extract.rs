//! 章节页面解析模块
//!
//! 从章节 HTML 中提取带难度标记的面试题。题目保存在页面的
//! 第一个有序列表里，每个列表项的文本形如
//! `Category [E] question text`，一个列表项可能包含多道题。

use std::collections::HashSet;

use anyhow::Result;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::error::AppError;
use crate::models::{ChapterQuestions, Difficulty};

/// 从章节页面的 HTML 中提取面试题
///
/// # 参数
/// - `markup`: 章节页面的 HTML 文本
///
/// # 返回
/// 返回按文档顺序排列的难度与题目平行列表。页面没有有序列表
/// 或者格式不符时返回空结果，不视为错误。
pub fn extract(markup: &str) -> Result<ChapterQuestions> {
    // 匹配难度标记与题目正文
    let tag_pattern = Regex::new(r"\[([EMH])\]\s(.*?)(?:\n|\z)")?;
    // 匹配第一个 "[" 之前的分类前缀
    let prefix_pattern = Regex::new(r"(?m)^\s*([^\[\n]+)")?;

    let document = Html::parse_document(markup);
    let ol_selector = Selector::parse("ol").unwrap();
    let li_selector = Selector::parse("li").unwrap();

    let mut chapter = ChapterQuestions::default();

    // 题目保存在第一个有序列表中
    let Some(ol_elem) = document.select(&ol_selector).next() else {
        return Ok(chapter);
    };

    // 以原始题目文本作为去重键，整页内生效
    let mut unique_questions: HashSet<String> = HashSet::new();

    for item in ol_elem.select(&li_selector) {
        let question_text: String = item.text().collect();

        // 提取分类前缀，去掉首尾空白后非空才拼接冒号
        let prefix = prefix_pattern
            .captures(&question_text)
            .map(|cap| cap[1].trim().to_string())
            .filter(|p| !p.is_empty())
            .map(|p| p + ":")
            .unwrap_or_default();

        for cap in tag_pattern.captures_iter(&question_text) {
            let Some(difficulty) = Difficulty::from_tag(&cap[1]) else {
                continue;
            };

            // 重复题目整条跳过，即使难度或前缀不同
            let raw_question = &cap[2];
            if unique_questions.contains(raw_question) {
                continue;
            }
            unique_questions.insert(raw_question.to_string());

            chapter.difficulty_levels.push(difficulty);
            chapter
                .questions
                .push(format!("{}{}", prefix, raw_question.trim()));
        }
    }

    debug!("解析出 {} 道题目", chapter.len());
    Ok(chapter)
}

/// 从章节 URL 中提取章节编号
///
/// 章节编号是 URL 路径中的点分数字段，如
/// `.../8.2.1-natural-language-processing.html` 的 `"8.2.1"`，
/// 用作输出文件名。
pub fn chapter_id(url: &str) -> Result<String> {
    let pattern = Regex::new(r"/(\d+(?:\.\d+)+)-")?;
    let id = pattern
        .captures(url)
        .map(|cap| cap[1].to_string())
        .ok_or_else(|| AppError::chapter_id_not_found(url))?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(list_items: &str) -> String {
        format!(
            "<html><body><h2>Questions</h2><ol>{}</ol></body></html>",
            list_items
        )
    }

    #[test]
    fn extract_returns_records_in_document_order() {
        let markup = page(
            "<li>[E] What is X?</li>\
             <li>[M] What is Y?</li>\
             <li>[H] What is Z?</li>",
        );
        let chapter = extract(&markup).unwrap();

        assert!(chapter.is_consistent());
        assert_eq!(
            chapter.difficulty_levels,
            vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
        assert_eq!(
            chapter.questions,
            vec!["What is X?", "What is Y?", "What is Z?"]
        );
    }

    #[test]
    fn extract_skips_duplicate_questions() {
        // 重复题目只保留第一次出现，即使难度不同
        let markup = page("<li>[E] Q1</li><li>[H] Q2</li><li>[M] Q1</li>");
        let chapter = extract(&markup).unwrap();

        assert_eq!(chapter.len(), 2);
        assert_eq!(
            chapter.difficulty_levels,
            vec![Difficulty::Easy, Difficulty::Hard]
        );
        assert_eq!(chapter.questions, vec!["Q1", "Q2"]);
    }

    #[test]
    fn extract_ignores_items_without_tags() {
        let markup = page("<li>Just an intro note</li><li>[E] Q1</li>");
        let chapter = extract(&markup).unwrap();

        assert_eq!(chapter.questions, vec!["Q1"]);
    }

    #[test]
    fn extract_prepends_category_prefix() {
        let markup = page("<li>Category A [E] What is X?</li><li>[M] What is Y?</li>");
        let chapter = extract(&markup).unwrap();

        assert_eq!(
            chapter.questions,
            vec!["Category A:What is X?", "What is Y?"]
        );
    }

    #[test]
    fn extract_applies_prefix_to_every_question_in_item() {
        // 一个列表项带分类标题和多道题
        let markup = page("<li>Text embeddings\n[E] What is X?\n[M] What is Y?</li>");
        let chapter = extract(&markup).unwrap();

        assert_eq!(
            chapter.questions,
            vec!["Text embeddings:What is X?", "Text embeddings:What is Y?"]
        );
        assert_eq!(
            chapter.difficulty_levels,
            vec![Difficulty::Easy, Difficulty::Medium]
        );
    }

    #[test]
    fn extract_uses_first_ordered_list_only() {
        let markup = "<html><body>\
             <ol><li>[E] Q1</li></ol>\
             <ol><li>[H] Q2</li></ol>\
             </body></html>";
        let chapter = extract(markup).unwrap();

        assert_eq!(chapter.questions, vec!["Q1"]);
    }

    #[test]
    fn extract_without_ordered_list_is_empty() {
        let chapter = extract("<html><body><p>no list here</p></body></html>").unwrap();

        assert!(chapter.is_empty());
        assert!(chapter.is_consistent());
    }

    #[test]
    fn extract_reads_nested_element_text() {
        // 列表项里的链接和行内标签都算题目文本
        let markup = page("<li>[E] What is <em>transfer learning</em>?</li>");
        let chapter = extract(&markup).unwrap();

        assert_eq!(chapter.questions, vec!["What is transfer learning?"]);
    }

    #[test]
    fn records_pairs_difficulty_with_text() {
        let markup = page("<li>[E] Q1</li><li>[H] Q2</li>");
        let records = extract(&markup).unwrap().records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tagged(), "[E] Q1");
        assert_eq!(records[1].tagged(), "[H] Q2");
    }

    #[test]
    fn chapter_id_from_url() {
        let url = "https://huyenchip.com/ml-interviews-book/contents/8.2.1-natural-language-processing.html";
        assert_eq!(chapter_id(url).unwrap(), "8.2.1");

        let url = "https://huyenchip.com/ml-interviews-book/contents/7.1-basics.html";
        assert_eq!(chapter_id(url).unwrap(), "7.1");
    }

    #[test]
    fn chapter_id_missing_is_error() {
        assert!(chapter_id("https://example.com/contents/introduction.html").is_err());
    }
}
