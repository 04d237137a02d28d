//! 通用工具函数

/// 将名称转换为 URL 友好的 slug
///
/// 小写化后把连续的非 `[a-z0-9]` 字符折叠为单个 `-`，并去掉首尾的 `-`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Golden Banana"), "golden-banana");
    }

    #[test]
    fn test_slugify_collapses_and_trims() {
        assert_eq!(slugify("  Baby Banana (Niño)!! "), "baby-banana-ni-o");
        assert_eq!(slugify("--Red--Banana--"), "red-banana");
    }

    #[test]
    fn test_slugify_no_alphanumerics() {
        assert_eq!(slugify("!!!"), "");
    }
}
