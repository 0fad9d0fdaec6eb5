use hsd_plot::ChartSpec;
use hsd_survey::LoadResult;

/// Text shown in place of a chart that failed to load.
pub const ERROR_MESSAGE: &str = "Error loading data";

/// `message` wrapped in the paragraph the page styles as an error.
pub fn error_markup(message: &str) -> String {
    let escaped = message
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&#39;");
    format!("<p class='error-message'>{}</p>", escaped)
}

/// Draws chart specifications into named containers.
///
/// Each call touches exactly one container, so loaders that share a
/// renderer never contend for the same target.
pub trait Renderer {
    /// Draw `spec` into `container_id`, replacing whatever was there.
    fn render(&self, container_id: &str, spec: &ChartSpec) -> LoadResult<()>;

    /// Replace the content of `container_id` with a user-facing error message.
    fn show_error(&self, container_id: &str, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_markup_wraps_the_fixed_message() {
        assert_eq!(
            error_markup(ERROR_MESSAGE),
            "<p class='error-message'>Error loading data</p>"
        );
    }

    #[test]
    fn error_markup_escapes_html() {
        assert_eq!(
            error_markup("<b>it's</b>"),
            "<p class='error-message'>&lt;b&gt;it&#39;s&lt;/b&gt;</p>"
        );
    }
}
