/// Cap on the answer panel height. Answers are short marketing copy, so a
/// fixed cap is enough and avoids measuring the DOM.
pub const ANSWER_MAX_HEIGHT_PX: u32 = 200;
pub const ANSWER_TRANSITION: &str = "max-height 0.4s ease";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub is_open: bool,
}

impl AccordionState {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }

    pub fn max_height_px(&self) -> u32 {
        if self.is_open {
            ANSWER_MAX_HEIGHT_PX
        } else {
            0
        }
    }

    pub fn panel_style(&self) -> String {
        format!(
            "max-height: {}px; overflow: hidden; transition: {};",
            self.max_height_px(),
            ANSWER_TRANSITION
        )
    }
}
