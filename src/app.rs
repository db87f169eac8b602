use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::input::InputHandler;
use crate::panels::{canvas_panel, status_panel};
use crate::renderer::Renderer;

pub struct GateEditorApp {
    editor: Editor,
    input: InputHandler,
    renderer: Renderer,
}

impl Default for GateEditorApp {
    fn default() -> Self {
        Self {
            editor: Editor::default(),
            input: InputHandler::new(),
            renderer: Renderer::default(),
        }
    }
}

impl GateEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(cc, EditorConfig::default())
    }

    pub fn with_config(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        log::info!("Starting gate editor");
        Self {
            editor: Editor::new(Default::default(), config),
            input: InputHandler::new(),
            renderer: Renderer::new(cc),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Keyboard shortcuts that act on the whole app.
    ///
    /// F1 shows or hides the status window.
    pub(crate) fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::F1)) {
            self.editor.toggle_status();
        }
    }

    /// Split borrow for the canvas pass, which reads input while mutating
    /// the editor.
    pub(crate) fn parts_mut(&mut self) -> (&mut Editor, &mut InputHandler, &Renderer) {
        (&mut self.editor, &mut self.input, &self.renderer)
    }
}

impl eframe::App for GateEditorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        canvas_panel(self, ctx);

        if self.editor.config().show_status {
            status_panel(self, ctx);
        }
    }
}
