use std::fmt;

/// The include asset a stock Nikola theme pulls its comment macros from.
pub const COMMENTS_HELPER: &str = "comments_helper.tmpl";

/// The include asset rewritten templates pull the Cactus macros from.
/// Also the file name the helper payload is deployed under.
pub const CACTUS_HELPER: &str = "comments_helper_cactus.tmpl";

/// The block the render call is injected into.
pub const EXTRA_HEAD_BLOCK: &str = "extra_head";

/// The two template languages a Nikola theme can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Mako,
    Jinja,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Mako, Dialect::Jinja];

    /// Prefix of the (left-stripped) line importing the comments helper.
    pub fn import_prefix(self) -> &'static str {
        match self {
            Dialect::Mako => "<%namespace",
            Dialect::Jinja => "{% import",
        }
    }

    /// Prefix of the (left-stripped) line opening a named block.
    pub fn block_open(self) -> &'static str {
        match self {
            Dialect::Mako => "<%block",
            Dialect::Jinja => "{% block",
        }
    }

    /// The whole (trimmed) line closing a block.
    pub fn block_close(self) -> &'static str {
        match self {
            Dialect::Mako => "</%block>",
            Dialect::Jinja => "{% endblock %}",
        }
    }

    /// The statement inserted at the end of the `extra_head` block, without
    /// a line terminator.
    pub fn render_call(self) -> &'static str {
        match self {
            Dialect::Mako => "${comments.comment_extra_head()}",
            Dialect::Jinja => "{{ comments.comment_extra_head() }}",
        }
    }

    /// File name of the helper payload shipped for this dialect.
    pub fn helper_payload(self) -> &'static str {
        match self {
            Dialect::Mako => "comments_helper_cactus_mako.tmpl",
            Dialect::Jinja => "comments_helper_cactus_jinja.tmpl",
        }
    }

    /// Classifies an include line by its import syntax.
    pub fn from_include_line(line: &str) -> Option<Self> {
        let stripped = line.trim_start();
        Self::ALL
            .into_iter()
            .find(|dialect| stripped.starts_with(dialect.import_prefix()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Mako => "mako",
            Dialect::Jinja => "jinja",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_include_line() {
        assert_eq!(
            Dialect::from_include_line(r#"<%namespace name="comments" file="comments_helper.tmpl"/>"#),
            Some(Dialect::Mako)
        );
        assert_eq!(
            Dialect::from_include_line("    {% import 'comments_helper.tmpl' as comments with context %}\n"),
            Some(Dialect::Jinja)
        );
    }

    #[test]
    fn test_from_include_line_requires_prefix() {
        // Mentions both markers but starts with neither.
        let line = r#"## {% import %} or <%namespace file="comments_helper.tmpl"/>"#;
        assert_eq!(Dialect::from_include_line(line), None);
    }

    #[test]
    fn test_cactus_helper_does_not_contain_canonical_name() {
        assert!(!CACTUS_HELPER.contains(COMMENTS_HELPER));
    }
}
