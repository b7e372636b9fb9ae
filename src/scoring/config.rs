use serde::{Deserialize, Serialize};

const POPULAR_KEYWORDS: &[&str] = &[
    "旅行", "旅游", "健康", "养生", "教育", "学习", "工作", "职场", "娱乐", "游戏", "美食", "运动",
    "理财", "投资", "购物", "穿搭",
];

/// Name fragments the enrichment stage writes when competitor research failed.
const SENTINEL_MARKERS: &[&str] = &["待调研", "解析失败", "API调用失败"];

/// Reference tables consulted by the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub popular_keywords: Vec<String>,
    pub sentinel_markers: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            popular_keywords: POPULAR_KEYWORDS.iter().map(|kw| kw.to_string()).collect(),
            sentinel_markers: SENTINEL_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}
