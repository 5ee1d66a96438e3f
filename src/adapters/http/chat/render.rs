//! Chat page renderer.
//!
//! Builds the full HTML document for the chat page from a render context.
//! Pure string assembly, no side effects; user-supplied values are escaped.

use crate::domain::{DailyTips, Profile};

/// Everything a page render needs.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub profile: Option<Profile>,
    pub reply: Option<String>,
    pub tips: DailyTips,
}

/// Escapes text for safe embedding in HTML body and attribute positions.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the complete chat page.
pub fn render_chat_page(ctx: &PageContext) -> String {
    let mut page = String::with_capacity(2048);

    page.push_str(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Wellness Companion</title>\n\
         </head>\n\
         <body>\n\
         <h1>Wellness Companion</h1>\n",
    );

    render_profile_section(&mut page, ctx.profile.as_ref());
    render_tips_section(&mut page, &ctx.tips);
    render_reply_section(&mut page, ctx.reply.as_deref());
    render_form(&mut page, ctx.profile.is_some());

    page.push_str("</body>\n</html>\n");
    page
}

fn render_profile_section(page: &mut String, profile: Option<&Profile>) {
    page.push_str("<section id=\"profile\">\n");
    match profile {
        Some(profile) => {
            if let Some(path) = profile.picture_path() {
                page.push_str(&format!(
                    "<img src=\"{}\" alt=\"profile picture\" width=\"96\">\n",
                    escape_html(path)
                ));
            }
            page.push_str(&format!(
                "<p>Signed in as <strong>{}</strong> ({})</p>\n",
                escape_html(profile.name()),
                escape_html(profile.username())
            ));
        }
        None => {
            page.push_str("<p>No profile yet. Add your name below to personalize.</p>\n");
        }
    }
    page.push_str("</section>\n");
}

fn render_tips_section(page: &mut String, tips: &DailyTips) {
    page.push_str("<section id=\"tips\">\n");
    page.push_str(&format!(
        "<p class=\"daily-thought\">{}</p>\n",
        escape_html(tips.daily_thought)
    ));
    page.push_str(&format!(
        "<p class=\"meal-suggestion\">Meal idea: {}</p>\n",
        escape_html(tips.meal_suggestion)
    ));
    page.push_str(&format!(
        "<p class=\"wellness-suggestion\">Practice: {}</p>\n",
        escape_html(tips.wellness_suggestion)
    ));
    page.push_str("</section>\n");
}

fn render_reply_section(page: &mut String, reply: Option<&str>) {
    page.push_str("<section id=\"reply\">\n");
    if let Some(reply) = reply {
        page.push_str(&format!(
            "<p class=\"assistant-reply\">{}</p>\n",
            escape_html(reply)
        ));
    }
    page.push_str("</section>\n");
}

fn render_form(page: &mut String, has_profile: bool) {
    page.push_str(
        "<form method=\"post\" action=\"/\" enctype=\"multipart/form-data\">\n\
         <textarea name=\"message\" required placeholder=\"Ask a health question...\"></textarea>\n",
    );
    if !has_profile {
        page.push_str(
            "<input type=\"text\" name=\"username\" placeholder=\"username\">\n\
             <input type=\"text\" name=\"name\" placeholder=\"display name\">\n\
             <input type=\"file\" name=\"profile_pic\" accept=\"image/*\">\n",
        );
    }
    page.push_str("<button type=\"submit\">Send</button>\n</form>\n");
}
