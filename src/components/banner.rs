use crate::message::Message;
use iced::border::{Border, Radius};
use iced::widget::text::Wrapping;
use iced::widget::{column, container, text, Container};
use iced::{Background, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

pub fn banner<'a>(tone: Tone, title: &'a str, detail: Option<&'a str>) -> Container<'a, Message> {
    let mark = match tone {
        Tone::Success => "✅",
        Tone::Error => "❌",
    };
    let mut content = column![text(format!("{mark} {title}")).size(18)].spacing(6);
    if let Some(detail) = detail {
        content = content.push(text(detail).wrapping(Wrapping::Word));
    }

    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(move |theme| banner_style(theme, tone))
}

fn banner_style(theme: &Theme, tone: Tone) -> container::Style {
    let palette = theme.extended_palette();
    let pair = match tone {
        Tone::Success => palette.success.weak,
        Tone::Error => palette.danger.weak,
    };

    container::Style {
        background: Some(Background::Color(pair.color)),
        text_color: Some(pair.text),
        border: Border {
            color: pair.color.scale_alpha(0.8),
            width: 1.0,
            radius: Radius::new(8.0),
        },
        ..Default::default()
    }
}
