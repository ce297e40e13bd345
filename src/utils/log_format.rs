//! 日志用记录预览
use std::fmt::{self, Write};

/// 日志中记录预览的最大字符数
pub const RECORD_PREVIEW_LEN: usize = 120;

/// 记录预览：去掉 JSON 字符串字面量之外的空白，超长截断并注明原始字节数
///
/// 多行缩进的记录在日志里压成一行，字符串值内部的空白保持原样。
/// 只做字符级扫描，不解析 JSON，非法记录同样可以预览。
pub struct RecordPreview<'a> {
    record: &'a str,
    max_chars: usize,
}

impl<'a> RecordPreview<'a> {
    pub fn new(record: &'a str) -> Self {
        Self::with_limit(record, RECORD_PREVIEW_LEN)
    }

    pub fn with_limit(record: &'a str, max_chars: usize) -> Self {
        Self { record, max_chars }
    }
}

impl fmt::Display for RecordPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = 0;
        let mut in_string = false;
        let mut escaped = false;

        for ch in self.record.chars() {
            if !in_string && ch.is_whitespace() {
                continue;
            }
            if written == self.max_chars {
                return write!(f, "…（共{}字节）", self.record.len());
            }

            if in_string {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == '"' {
                    in_string = false;
                }
            } else if ch == '"' {
                in_string = true;
            }

            f.write_char(ch)?;
            written += 1;
        }
        Ok(())
    }
}

/// 记录预览（默认长度）
#[inline(always)]
pub fn preview_record(record: &str) -> RecordPreview<'_> {
    RecordPreview::new(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_strips_layout_whitespace() {
        // 测试场景：多行缩进记录压成一行，字符串内空格保留
        let raw = " {\n     \"event\":\"View Product\",\n     \"time\": 1434556935000\n }";
        assert_eq!(
            preview_record(raw).to_string(),
            r#"{"event":"View Product","time":1434556935000}"#
        );
    }

    #[test]
    fn test_preview_escaped_quote_stays_in_string() {
        // 测试场景：字符串内的转义引号不结束字符串，后续空格保留
        let raw = r#"{"name":"a\" b c"}"#;
        assert_eq!(preview_record(raw).to_string(), raw);
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        // 测试场景：按字符截断中文内容并注明原始字节数
        let raw = "苹果梨萝卜";
        assert_eq!(
            RecordPreview::with_limit(raw, 3).to_string(),
            format!("苹果梨…（共{}字节）", raw.len())
        );
        assert_eq!(RecordPreview::with_limit("abc", 3).to_string(), "abc");
    }

    #[test]
    fn test_preview_record_bounded() {
        // 测试场景：超长记录按默认长度截断
        let long = "x".repeat(RECORD_PREVIEW_LEN * 2);
        let preview = preview_record(&long).to_string();
        assert!(preview.starts_with(&"x".repeat(RECORD_PREVIEW_LEN)));
        assert!(preview.ends_with(&format!("…（共{}字节）", long.len())));
    }

    #[test]
    fn test_preview_trailing_whitespace_not_truncated() {
        // 测试场景：末尾只剩空白时不追加省略号
        assert_eq!(RecordPreview::with_limit("ab \n ", 2).to_string(), "ab");
    }
}
