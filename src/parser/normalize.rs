//! 标点归一化
//!
//! 把源文档中的全角句点、冒号和括号替换为半角

use phf::phf_map;

static PUNCTUATION: phf::Map<char, char> = phf_map! {
    '．' => '.',
    '：' => ':',
    '（' => '(',
    '）' => ')',
};

/// 全角标点替换为半角，其余字符保持不变
pub fn normalize_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| PUNCTUATION.get(&c).copied().unwrap_or(c))
        .collect()
}

/// 题号数字转为 ASCII，支持全角数字 `０`-`９`
///
/// 含其他字符时返回 `None`
pub fn to_ascii_digits(digits: &str) -> Option<String> {
    digits
        .chars()
        .map(|c| match c {
            '0'..='9' => Some(c),
            '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32),
            _ => None,
        })
        .collect()
}

/// 解析题号，支持全角数字；超出 `u32` 范围或含其他字符时返回 `None`
pub fn parse_index(digits: &str) -> Option<u32> {
    to_ascii_digits(digits)?.parse::<u32>().ok()
}
