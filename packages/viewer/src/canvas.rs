/// The subset of the HTML canvas 2D context the renderer needs.
///
/// Paths follow canvas semantics: `begin_path` drops the current path,
/// `move_to` starts a subpath, `stroke` draws the whole path and keeps it.
pub trait Canvas2d {
    fn clear(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self);
    /// Draw `text` with its left edge at `x` and its baseline at `y`.
    fn stroke_text(&mut self, text: &str, x: f32, y: f32);
}

/// Records every call, for checking what a renderer asked for.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CallLog {
    pub calls: Vec<CanvasCall>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCall {
    Clear,
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Stroke,
    StrokeText(String, f32, f32),
}

impl Canvas2d for CallLog {
    fn clear(&mut self) {
        self.calls.push(CanvasCall::Clear);
    }

    fn begin_path(&mut self) {
        self.calls.push(CanvasCall::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.calls.push(CanvasCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.calls.push(CanvasCall::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.calls.push(CanvasCall::Stroke);
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        self.calls.push(CanvasCall::StrokeText(text.to_string(), x, y));
    }
}
