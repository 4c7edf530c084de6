use url::Url;

/// Origin of a fetched page: scheme + host + non-default port, no trailing
/// slash. `https://example.com`, `http://127.0.0.1:8080`.
pub fn page_origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Injects a `<base>` element so relative links in `content` resolve against
/// `origin` when the document is rendered outside its original origin.
///
/// The tag lands immediately inside the first `<head>` opening tag, matched
/// ASCII case-insensitively; every other byte of the document is left
/// untouched. Documents without a head are wrapped in a minimal skeleton.
/// This is a string-level rewrite, not an HTML parse: head tags carrying
/// attributes are not matched.
pub fn inject_base_tag(content: &str, origin: &str) -> String {
    let tag = format!("<base href=\"{}/\" />", origin);

    match head_open_end(content) {
        Some(idx) => {
            let mut rewritten = String::with_capacity(content.len() + tag.len());
            rewritten.push_str(&content[..idx]);
            rewritten.push_str(&tag);
            rewritten.push_str(&content[idx..]);
            rewritten
        }
        None => format!(
            "<!DOCTYPE html><html><head>{}</head><body>{}</body></html>",
            tag, content
        ),
    }
}

/// Byte offset just past the first `<head>` opening tag, any ASCII casing.
fn head_open_end(content: &str) -> Option<usize> {
    const NEEDLE: &[u8] = b"<head>";
    content
        .as_bytes()
        .windows(NEEDLE.len())
        .position(|window| window.eq_ignore_ascii_case(NEEDLE))
        .map(|idx| idx + NEEDLE.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_tag_as_first_child_of_head() {
        let input = "<html><head><title>Hi</title></head><body>ok</body></html>";
        let output = inject_base_tag(input, "https://example.com");
        assert_eq!(
            output,
            "<html><head><base href=\"https://example.com/\" /><title>Hi</title></head><body>ok</body></html>"
        );
    }

    #[test]
    fn matches_head_case_insensitively() {
        let upper = inject_base_tag("<HTML><HEAD></HEAD></HTML>", "https://example.com");
        assert_eq!(
            upper,
            "<HTML><HEAD><base href=\"https://example.com/\" /></HEAD></HTML>"
        );

        let mixed = inject_base_tag("<html><Head></Head></html>", "https://example.com");
        assert_eq!(
            mixed,
            "<html><Head><base href=\"https://example.com/\" /></Head></html>"
        );
    }

    #[test]
    fn only_first_head_gets_the_tag() {
        let input = "<head></head><head></head>";
        let output = inject_base_tag(input, "https://example.com");
        assert_eq!(
            output,
            "<head><base href=\"https://example.com/\" /></head><head></head>"
        );
    }

    #[test]
    fn wraps_headless_documents() {
        let output = inject_base_tag("<p>hello</p>", "https://example.com");
        assert_eq!(
            output,
            "<!DOCTYPE html><html><head><base href=\"https://example.com/\" /></head><body><p>hello</p></body></html>"
        );
    }

    #[test]
    fn origin_elides_default_ports() {
        let url = Url::parse("https://example.com:443/a/b?c=d").unwrap();
        assert_eq!(page_origin(&url), "https://example.com");
    }

    #[test]
    fn origin_keeps_explicit_ports() {
        let url = Url::parse("http://127.0.0.1:8080/index.html").unwrap();
        assert_eq!(page_origin(&url), "http://127.0.0.1:8080");
    }
}
