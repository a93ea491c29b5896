//! Root-level subscription composition

use iced::Subscription;
use iced::window;

use crate::messages::Message;
use crate::state::State;

/// Timers and window events feeding the page.
///
/// The countdown timer is dropped from the batch once the countdown has
/// finished; the carousel timer runs for the life of the window and is not
/// reset by manual navigation.
pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![
        iced::time::every(state.settings.carousel_interval).map(|_| Message::AutoAdvance),
        window::events().map(|(_id, event)| match event {
            window::Event::Opened { size, .. } | window::Event::Resized(size) => {
                Message::WindowResized(size)
            }
            _ => Message::NoOp,
        }),
    ];

    if state.countdown_active() {
        subscriptions.push(
            iced::time::every(state.settings.countdown_tick).map(|_| Message::CountdownTick),
        );
    }

    Subscription::batch(subscriptions)
}
