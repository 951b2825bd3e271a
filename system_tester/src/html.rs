//!
//! The HTML text extraction.
//!

lazy_static::lazy_static! {
    ///
    /// A comment, or a script or style element, whose content is not rendered text.
    ///
    static ref NON_TEXT: regex::Regex = regex::Regex::new(
        r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>"
    )
    .expect("Always valid");

    ///
    /// Any opening or closing tag.
    ///
    static ref TAG: regex::Regex = regex::Regex::new(r"<[^>]*>").expect("Always valid");

    ///
    /// A named or numeric character reference.
    ///
    static ref ENTITY: regex::Regex =
        regex::Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("Always valid");
}

///
/// Returns the text content of the first `tag` element, with nested tags stripped.
///
/// Elements inside comments and script or style elements are not matched.
///
pub fn first_element_text(html: &str, tag: &str) -> Option<String> {
    let pattern = format!(
        r"(?is)<{tag}(?:\s[^>]*)?>(.*?)</{tag}\s*>",
        tag = regex::escape(tag)
    );
    let element = regex::Regex::new(pattern.as_str()).expect("Always valid");

    let html = NON_TEXT.replace_all(html, "");
    let inner = element.captures(html.as_ref())?.get(1)?.as_str();
    Some(decode_entities(TAG.replace_all(inner, "").as_ref()))
}

///
/// Decodes the basic character references. Unknown references are kept as is.
///
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |captures: &regex::Captures| {
            let reference = &captures[1];
            let decoded = match reference {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                reference if reference.starts_with("#x") || reference.starts_with("#X") => {
                    u32::from_str_radix(&reference[2..], 16)
                        .ok()
                        .and_then(char::from_u32)
                }
                reference if reference.starts_with('#') => {
                    reference[1..].parse::<u32>().ok().and_then(char::from_u32)
                }
                _ => None,
            };
            match decoded {
                Some(character) => character.to_string(),
                None => captures[0].to_owned(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    #[test]
    fn first_element() {
        let html = r#"<html><body>
            <pre><code>code</code></pre>
            <h1 id="this-is-the-h1">This is the h1</h1>
            <p>First <em>paragraph</em></p>
            <p>Second</p>
        </body></html>"#;

        assert_eq!(
            super::first_element_text(html, "h1").as_deref(),
            Some("This is the h1")
        );
        assert_eq!(
            super::first_element_text(html, "p").as_deref(),
            Some("First paragraph")
        );
        assert_eq!(super::first_element_text(html, "h2"), None);
    }

    #[test]
    fn case_and_newlines() {
        let html = "<H1 class=\"title\">Multi\nline</H1>";
        assert_eq!(
            super::first_element_text(html, "h1").as_deref(),
            Some("Multi\nline")
        );
    }

    #[test]
    fn comments_and_scripts_skipped() {
        let html = r#"<head>
            <script type="text/javascript">document.write("<h1>Scripted</h1>");</script>
            <style>p::before { content: "<p>Styled</p>"; }</style>
        </head>
        <body>
            <!-- <h1>Commented</h1> <p>Commented</p> -->
            <h1>Rendered</h1>
            <p>Paragraph</p>
        </body>"#;

        assert_eq!(
            super::first_element_text(html, "h1").as_deref(),
            Some("Rendered")
        );
        assert_eq!(
            super::first_element_text(html, "p").as_deref(),
            Some("Paragraph")
        );
    }

    #[test]
    fn entities() {
        assert_eq!(
            super::decode_entities("Tom &amp; Jerry &lt;3 &#39;x&#x27; &unknown;"),
            "Tom & Jerry <3 'x' &unknown;"
        );
    }
}
