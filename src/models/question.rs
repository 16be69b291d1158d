use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// 单道面试题
///
/// `text` 已经包含分类前缀（如果列表项带有分类标签），
/// 形如 `"Category A:What is X?"`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub difficulty: Difficulty,
    pub text: String,
}

impl Question {
    /// 渲染为带难度标记的形式，如 `"[E] What is X?"`
    pub fn tagged(&self) -> String {
        format!("[{}] {}", self.difficulty.tag(), self.text)
    }
}

/// 从一个章节页面解析出的题目集合
///
/// 难度与题目保存为两个平行列表；写出章节文件前由调用方
/// 校验两个列表长度一致，不一致时跳过该章节。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChapterQuestions {
    /// 难度列表（文档顺序）
    pub difficulty_levels: Vec<Difficulty>,
    /// 题目列表（文档顺序，已拼接分类前缀）
    pub questions: Vec<String>,
}

impl ChapterQuestions {
    /// 题目数量
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 两个平行列表长度是否一致
    pub fn is_consistent(&self) -> bool {
        self.difficulty_levels.len() == self.questions.len()
    }

    /// 按文档顺序生成题目记录
    pub fn records(&self) -> Vec<Question> {
        self.difficulty_levels
            .iter()
            .zip(&self.questions)
            .map(|(difficulty, text)| Question {
                difficulty: *difficulty,
                text: text.clone(),
            })
            .collect()
    }
}
