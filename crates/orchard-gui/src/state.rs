use orchard_core::input::DropZone;

/// UI-only state that is not part of the detection session.
#[derive(Default)]
pub struct UIState {
    pub log_messages: Vec<String>,
    /// Blocking notification text, shown in a modal until dismissed.
    pub notification: Option<String>,
    pub drop_zone: DropZone,
    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn notify(&mut self, msg: impl Into<String>) {
        self.notification = Some(msg.into());
    }
}

/// Preview texture state.
#[derive(Default)]
pub struct PreviewState {
    pub texture: Option<egui::TextureHandle>,
    /// Original image size, before any texture downscaling.
    pub image_size: Option<[u32; 2]>,
}
