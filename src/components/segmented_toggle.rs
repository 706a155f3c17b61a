use crate::message::Message;
use crate::model::Workspace;
use iced::border::{Border, Radius};
use iced::widget::button::{Status, Style};
use iced::widget::text::Wrapping;
use iced::widget::{button, container, row, text, Button, Container};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

pub fn workspace_toggle(current: Workspace) -> Container<'static, Message> {
    let toggle_row = row![
        segment(Workspace::Plate, current, SegmentPosition::Left).width(Length::FillPortion(1)),
        segment(Workspace::Dicom, current, SegmentPosition::Right).width(Length::FillPortion(1)),
    ]
    .spacing(0);

    container(toggle_row)
        .padding(3)
        .width(Length::Fixed(420.0))
        .style(track_style)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentPosition {
    Left,
    Right,
}

fn segment(
    workspace: Workspace,
    current: Workspace,
    position: SegmentPosition,
) -> Button<'static, Message> {
    let is_active = workspace == current;
    let content = container(text(workspace.title()).size(14).wrapping(Wrapping::None))
        .width(Length::Fill)
        .height(Length::Fixed(32.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 16]);

    button(content)
        .padding(0)
        .on_press(Message::SetWorkspace(workspace))
        .style(move |theme, status| segment_style(theme, status, is_active, position))
}

fn track_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: Radius::new(999.0),
        },
        ..Default::default()
    }
}

fn segment_style(
    theme: &Theme,
    status: Status,
    is_active: bool,
    position: SegmentPosition,
) -> Style {
    let palette = theme.extended_palette();

    let (background, text_color) = if is_active {
        (Some(palette.primary.base.color), palette.primary.base.text)
    } else {
        let tint = match status {
            Status::Hovered => Some(palette.background.weak.color),
            Status::Pressed => Some(palette.background.strong.color),
            Status::Active | Status::Disabled => None,
        };
        (tint, palette.background.base.text)
    };

    let (left, right) = match position {
        SegmentPosition::Left => (999.0, 0.0),
        SegmentPosition::Right => (0.0, 999.0),
    };
    let radius = Radius {
        top_left: left,
        top_right: right,
        bottom_right: right,
        bottom_left: left,
    };

    Style {
        background: background.map(Background::Color),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius,
        },
        shadow: Shadow::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_current_workspace_is_filled() {
        let theme = Theme::Dark;
        let palette = theme.extended_palette();

        let active = segment_style(&theme, Status::Active, true, SegmentPosition::Left);
        assert_eq!(active.background, Some(Background::Color(palette.primary.base.color)));
        assert_eq!(active.border.radius.top_left, 999.0);
        assert_eq!(active.border.radius.top_right, 0.0);

        let idle = segment_style(&theme, Status::Active, false, SegmentPosition::Right);
        assert_eq!(idle.background, None);
        assert_eq!(idle.border.radius.bottom_right, 999.0);

        let hovered = segment_style(&theme, Status::Hovered, false, SegmentPosition::Right);
        assert_eq!(
            hovered.background,
            Some(Background::Color(palette.background.weak.color))
        );
    }
}
