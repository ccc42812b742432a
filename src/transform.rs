use crate::dialect::{Dialect, CACTUS_HELPER, COMMENTS_HELPER};
use crate::error::Result;
use crate::locator::{locate, Anchors};

/// Produces the rewritten copy of `lines`.
///
/// The include line gets `comments_helper.tmpl` swapped for the Cactus
/// helper and the render call is inserted right before the line closing
/// `extra_head`, ending the way that line (or the one above it) ends. Every
/// other line is copied as is.
pub fn synthesize(lines: &[String], dialect: Dialect, anchors: &Anchors) -> Vec<String> {
    let mut modified = Vec::with_capacity(lines.len() + 1);
    for (index, line) in lines.iter().enumerate() {
        if index == anchors.block_end {
            let ending = line_ending(lines, index);
            modified.push(format!("{}{}", dialect.render_call(), ending));
        }
        if index == anchors.include {
            modified.push(line.replace(COMMENTS_HELPER, CACTUS_HELPER));
        } else {
            modified.push(line.clone());
        }
    }
    modified
}

/// The terminator of `lines[index]`, falling back to the previous line's when
/// it is the unterminated last line.
fn line_ending(lines: &[String], index: usize) -> &'static str {
    let terminator = |line: &str| {
        if line.ends_with("\r\n") {
            Some("\r\n")
        } else if line.ends_with('\n') {
            Some("\n")
        } else {
            None
        }
    };
    terminator(lines[index].as_str())
        .or_else(|| index.checked_sub(1).and_then(|prev| terminator(lines[prev].as_str())))
        .unwrap_or("\n")
}

/// Locates the anchors in `lines` and returns the detected dialect together
/// with the rewritten lines.
pub fn cactusify(lines: &[String], name: &str) -> Result<(Dialect, Vec<String>)> {
    let (dialect, anchors) = locate(lines, name)?;
    Ok((dialect, synthesize(lines, dialect, &anchors)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::split_lines;
    use crate::error::CactusError;

    fn assert_single_insertion(original: &[String], modified: &[String], anchors: &Anchors) {
        assert_eq!(modified.len(), original.len() + 1);
        for (index, line) in original.iter().enumerate() {
            let shifted = if index >= anchors.block_end { index + 1 } else { index };
            if index != anchors.include {
                assert_eq!(&modified[shifted], line, "line {} changed", index);
            }
        }
    }

    #[test]
    fn test_mako_edit() {
        let original = split_lines(concat!(
            "## -*- coding: utf-8 -*-\n",
            "  <%namespace name=\"comments\" file=\"comments_helper.tmpl\"/>\n",
            "<%inherit file=\"post.tmpl\"/>\n",
            "<%block name=\"extra_head\">\n",
            "${parent.extra_head()}\n",
            "</%block>\n",
            "<%block name=\"content\">\n",
            "</%block>\n",
        ));
        let (dialect, anchors) = locate(&original, "story.tmpl").unwrap();
        let modified = synthesize(&original, dialect, &anchors);

        assert_single_insertion(&original, &modified, &anchors);
        assert_eq!(
            modified[1],
            "  <%namespace name=\"comments\" file=\"comments_helper_cactus.tmpl\"/>\n"
        );
        assert_eq!(modified[5], "${comments.comment_extra_head()}\n");
        assert_eq!(modified[6], "</%block>\n");
    }

    #[test]
    fn test_jinja_edit() {
        let original = split_lines(concat!(
            "{% import 'comments_helper.tmpl' as comments with context %}\n",
            "{% extends 'base.tmpl' %}\n",
            "{% block extra_head %}\n",
            "    {{ super() }}\n",
            "    {% endblock %}\n",
        ));
        let (dialect, modified) = cactusify(&original, "post.tmpl").unwrap();

        assert_eq!(dialect, Dialect::Jinja);
        assert_eq!(modified.len(), original.len() + 1);
        assert_eq!(
            modified[0],
            "{% import 'comments_helper_cactus.tmpl' as comments with context %}\n"
        );
        assert_eq!(&modified[1..4], &original[1..4]);
        assert_eq!(modified[4], "{{ comments.comment_extra_head() }}\n");
        assert_eq!(modified[5], "    {% endblock %}\n");
    }

    #[test]
    fn test_include_line_keeps_other_content() {
        let original = split_lines(concat!(
            "\t<%namespace name=\"comments\" file=\"comments_helper.tmpl\"/> ## keep me\r\n",
            "<%block name=\"extra_head\">\r\n",
            "</%block>\r\n",
        ));
        let (_, modified) = cactusify(&original, "post.tmpl").unwrap();
        assert_eq!(
            modified[0],
            "\t<%namespace name=\"comments\" file=\"comments_helper_cactus.tmpl\"/> ## keep me\r\n"
        );
        assert_eq!(modified[2], "</%block>\r\n");
    }

    #[test]
    fn test_crlf_template_keeps_crlf() {
        let original = split_lines(concat!(
            "{% import 'comments_helper.tmpl' as comments %}\r\n",
            "{% block extra_head %}\r\n",
            "{% endblock %}\r\n",
        ));
        let (_, modified) = cactusify(&original, "post.tmpl").unwrap();
        assert_eq!(modified[2], "{{ comments.comment_extra_head() }}\r\n");
        assert!(modified.iter().all(|line| line.ends_with("\r\n")));
    }

    #[test]
    fn test_unterminated_block_end_uses_previous_ending() {
        let original = split_lines(concat!(
            "{% import 'comments_helper.tmpl' as comments %}\r\n",
            "{% block extra_head %}\r\n",
            "{% endblock %}",
        ));
        let (_, modified) = cactusify(&original, "post.tmpl").unwrap();
        assert_eq!(
            modified,
            vec![
                "{% import 'comments_helper_cactus.tmpl' as comments %}\r\n",
                "{% block extra_head %}\r\n",
                "{{ comments.comment_extra_head() }}\r\n",
                "{% endblock %}",
            ]
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let original = split_lines(concat!(
            "{% import 'comments_helper.tmpl' as comments %}\n",
            "{% block extra_head %}\n",
            "{% endblock %}\n",
        ));
        let pristine = original.clone();
        let _ = cactusify(&original, "post.tmpl").unwrap();
        assert_eq!(original, pristine);
    }

    #[test]
    fn test_deterministic_and_not_reapplicable() {
        let original = split_lines(concat!(
            "{% import 'comments_helper.tmpl' as comments %}\n",
            "{% block extra_head %}\n",
            "{% endblock %}\n",
        ));
        let (_, first) = cactusify(&original, "post.tmpl").unwrap();
        let (_, second) = cactusify(&original, "post.tmpl").unwrap();
        assert_eq!(first, second);

        let err = cactusify(&first, "post.tmpl").unwrap_err();
        assert!(matches!(err, CactusError::MissingInclude(_)));
    }
}
