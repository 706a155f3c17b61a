use crate::message::Message;
use crate::model::RenderedImage;
use iced::widget::{text, Image};
use iced::{Element, Length};

pub fn image_panel(image: Option<&RenderedImage>) -> Element<'static, Message> {
    if let Some(image) = image {
        if let Some(handle) = &image.handle {
            Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            text("Image preview unavailable").into()
        }
    } else {
        text("No image returned").into()
    }
}
