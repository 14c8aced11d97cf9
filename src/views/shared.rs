use comrak::{Options, markdown_to_html as render_markdown};
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

/// Renders assistant markdown. Raw HTML in the source is escaped.
pub fn markdown_to_html(md: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.render.escape = true;
    render_markdown(md, &options)
}

pub fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}
