use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element, Length};

/// Lays a dimmed, click-to-dismiss overlay with `content` centered on top
/// of `base`. Clicking the backdrop emits `on_dismiss`; clicks on the
/// content itself are consumed.
pub fn modal_overlay<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let backdrop = center(opaque(content)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.6,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    stack![base.into(), opaque(mouse_area(backdrop).on_press(on_dismiss))].into()
}

/// Card chrome for a modal form.
pub fn form_card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(content)
        .style(container::rounded_box)
        .width(Length::Fixed(420.0))
        .into()
}
