//! 显示格式化工具

use url::Url;

/// 千分位格式化，例如 `10500` -> `10,500`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 按字符数截断，超出部分以 `...` 结尾
///
/// 结果永远不超过 `max_chars` 个字符；放不下省略号时直接截断。
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars < 3 {
        return text.chars().take(max_chars).collect();
    }
    let keep = max_chars - 3;
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// 完整短链接：域名前缀直接拼接 key
pub fn short_link(domain: &str, key: &str) -> String {
    format!("{}{}", domain, key)
}

/// 提取 http(s) 目标地址的主机名
pub fn outbound_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    parsed.host_str().map(|host| host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1200), "1,200");
        assert_eq!(format_thousands(10500), "10,500");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("https://example.com/long", 10), "https:/...");
        assert_eq!(truncate_chars("ééééé", 4), "é...");
        assert_eq!(truncate_chars("abcd", 3), "...");
    }

    #[test]
    fn test_truncate_chars_never_exceeds_limit() {
        assert_eq!(truncate_chars("abc", 2), "ab");
        assert_eq!(truncate_chars("/tiktok", 1), "/");
        assert_eq!(truncate_chars("/tiktok", 0), "");
        for limit in 0..10 {
            let out = truncate_chars("https://example.com", limit);
            assert!(out.chars().count() <= limit);
        }
    }

    #[test]
    fn test_short_link() {
        assert_eq!(short_link("your-domain.com", "/fb"), "your-domain.com/fb");
    }

    #[test]
    fn test_outbound_host() {
        assert_eq!(
            outbound_host("https://tiktok.com/campaign").as_deref(),
            Some("tiktok.com")
        );
        assert_eq!(outbound_host("not a url"), None);
        assert_eq!(outbound_host("javascript:alert(1)"), None);
    }
}
