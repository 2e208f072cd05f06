use macroquad::prelude::*;

/// How a panel button is painted this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonLook {
    Idle,
    Hovered,
    /// Calls for a click, e.g. Play Again once the game has ended
    Attention,
}

impl ButtonLook {
    fn fill(self) -> Color {
        match self {
            ButtonLook::Idle => Color::from_rgba(60, 60, 60, 255),
            ButtonLook::Hovered => Color::from_rgba(90, 90, 90, 255),
            ButtonLook::Attention => Color::from_rgba(255, 215, 0, 255),
        }
    }

    fn text(self) -> Color {
        match self {
            ButtonLook::Attention => BLACK,
            _ => WHITE,
        }
    }
}

/// Panel button laid out by `ui`
#[derive(Clone, Debug)]
pub struct Button {
    bounds: Rect,
    label: &'static str,
}

impl Button {
    pub fn new(bounds: Rect, label: &'static str) -> Self {
        Self { bounds, label }
    }

    pub fn contains(&self, pos: (f32, f32)) -> bool {
        self.bounds.contains(vec2(pos.0, pos.1))
    }

    /// Attention wins over hover so an ended game stays obvious
    pub fn look(&self, mouse_pos: (f32, f32), attention: bool) -> ButtonLook {
        if attention {
            ButtonLook::Attention
        } else if self.contains(mouse_pos) {
            ButtonLook::Hovered
        } else {
            ButtonLook::Idle
        }
    }

    pub fn draw(&self, look: ButtonLook) {
        let Rect { x, y, w, h } = self.bounds;
        draw_rectangle(x, y, w, h, look.fill());
        draw_rectangle_lines(x, y, w, h, 1.0, LIGHTGRAY);

        let size = measure_text(self.label, None, 20, 1.0);
        draw_text(
            self.label,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            20.0,
            look.text(),
        );
    }

    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
