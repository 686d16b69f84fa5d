use iced::Size;
use mapdice_core::MapId;

#[derive(Debug, Clone)]
pub enum Message {
    // Grid
    CardToggled(MapId),

    // Picker
    PickerPressed,
    AnimationTick,

    // Window
    WindowResized(Size),
}
