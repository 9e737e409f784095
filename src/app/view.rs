// SPDX-License-Identifier: MPL-2.0
//! View composition for the preview window.
//!
//! The preview mirrors the document model: the sample panel is aligned per
//! the applied direction, and the status block prints the raw page state
//! (attributes, marker classes, stylesheet flags) so layout changes are
//! directly observable.

use super::{App, Message};
use crate::page::{PageSurface, DIR_ATTR, LANG_ATTR};
use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Button, Column, Container, Row, Text},
    Element, Length,
};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let i18n = &app.i18n;
    let title = Text::new(i18n.tr("window-title")).size(30);

    let mut language_row = Row::new().spacing(10);
    for locale in &i18n.available_locales {
        let display_name = locale.to_string();
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = i18n.tr(&translated_name_key);
        let button_text = if translated_name == translated_name_key {
            display_name // No translation shipped; show the raw locale
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = i18n.current_locale() == locale;
        let mut language_button =
            Button::new(Text::new(button_text)).on_press(Message::LanguageSelected(locale.clone()));
        if is_current_locale {
            language_button = language_button.style(button::primary);
        } else {
            language_button = language_button.style(button::secondary);
        }
        language_row = language_row.push(language_button);
    }

    let tag_placeholder = i18n.tr("tag-input-placeholder");
    let tag_input = text_input(tag_placeholder.as_str(), &app.tag_input)
        .on_input(Message::TagInputChanged)
        .on_submit(Message::TagSubmitted)
        .padding(6)
        .width(Length::Fixed(180.0));
    let submit_button =
        Button::new(Text::new(i18n.tr("tag-submit-button"))).on_press(Message::TagSubmitted);
    let reevaluate_button =
        Button::new(Text::new(i18n.tr("reevaluate-button"))).on_press(Message::ForceReevaluate);
    let tag_row = Row::new()
        .spacing(10)
        .push(tag_input)
        .push(submit_button)
        .push(reevaluate_button);

    let is_rtl = app.direction().is_rtl();
    let preview_alignment = if is_rtl {
        Horizontal::Right
    } else {
        Horizontal::Left
    };
    let preview = Column::new()
        .spacing(8)
        .width(Length::Fill)
        .align_x(preview_alignment)
        .push(Text::new(i18n.tr("preview-title")).size(20))
        .push(Text::new(i18n.tr("preview-body")));
    let preview_panel = Container::new(preview).width(Length::Fill).padding(16);

    let direction_label = if is_rtl {
        i18n.tr("direction-rtl")
    } else {
        i18n.tr("direction-ltr")
    };
    let declared = app.page.attribute(LANG_ATTR).unwrap_or_default();
    let dir_attr = app.page.attribute(DIR_ATTR).unwrap_or_default();
    let markers = app.page.classes().collect::<Vec<_>>().join(" ");

    let mut status = Column::new()
        .spacing(4)
        .push(Text::new(format!("{}: {}", i18n.tr("status-language"), declared)).size(14))
        .push(
            Text::new(format!(
                "{}: {} ({})",
                i18n.tr("status-direction"),
                dir_attr,
                direction_label
            ))
            .size(14),
        )
        .push(Text::new(format!("{}: {}", i18n.tr("status-markers"), markers)).size(14))
        .push(Text::new(i18n.tr("status-stylesheets")).size(14));
    for sheet in app.page.stylesheets() {
        let state = if sheet.disabled {
            i18n.tr("stylesheet-disabled")
        } else {
            i18n.tr("stylesheet-enabled")
        };
        status = status.push(Text::new(format!("  {}: {}", sheet.id, state)).size(14));
    }

    Column::new()
        .push(title)
        .push(Text::new(i18n.tr("language-section-label")))
        .push(language_row)
        .push(tag_row)
        .push(preview_panel)
        .push(status)
        .spacing(20)
        .padding(20)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
