use crate::core::geometry::TriangleLayout;
use crate::core::table::TripletTable;
use crate::core::triplets::find_triplets;
use crate::domain::model::{Canvas, FormInputs};
use crate::utils::error::Result;
use crate::utils::validation::{parse_max_sum, parse_triangle};

/// Mutable state behind the form: the raw field texts, the canvas size, the
/// last drawing, the last results table and the status line.
///
/// Every request re-validates the field texts. A failed draw clears the
/// drawing. A failed search keeps the previous table.
#[derive(Debug, Clone)]
pub struct Session {
    inputs: FormInputs,
    canvas: Canvas,
    drawing: Option<TriangleLayout>,
    table: Option<TripletTable>,
    message: String,
}

impl Session {
    pub fn new(inputs: FormInputs, canvas: Canvas) -> Self {
        Self {
            inputs,
            canvas,
            drawing: None,
            table: None,
            message: String::new(),
        }
    }

    /// Draws and searches once, like opening the window. Errors only show up
    /// in the status line.
    pub fn start(&mut self) {
        let _ = self.draw();
        let _ = self.find();
    }

    pub fn set_a(&mut self, text: impl Into<String>) {
        self.inputs.a = text.into();
    }

    pub fn set_b(&mut self, text: impl Into<String>) {
        self.inputs.b = text.into();
    }

    pub fn set_max_sum(&mut self, text: impl Into<String>) {
        self.inputs.max_sum = text.into();
    }

    pub fn draw(&mut self) -> Result<&TriangleLayout> {
        match parse_triangle(&self.inputs.a, &self.inputs.b) {
            Ok(spec) => {
                self.message.clear();
                let layout = TriangleLayout::compute(spec, self.canvas);
                tracing::debug!(summary = %layout.describe(), "triangle drawn");
                Ok(&*self.drawing.insert(layout))
            }
            Err(e) => {
                tracing::debug!("draw rejected: {}", e);
                self.message = e.user_friendly_message();
                self.drawing = None;
                Err(e)
            }
        }
    }

    pub fn find(&mut self) -> Result<&TripletTable> {
        match parse_max_sum(&self.inputs.max_sum) {
            Ok(bound) => {
                self.message.clear();
                let table = TripletTable::new(bound, &find_triplets(bound.get()));
                self.message = if table.is_empty() {
                    "Keine Tripel gefunden.".to_string()
                } else {
                    format!("{} Tripel gefunden.", table.len())
                };
                tracing::info!(max_sum = bound.get(), found = table.len(), "triplet search");
                Ok(&*self.table.insert(table))
            }
            Err(e) => {
                tracing::debug!("search rejected: {}", e);
                self.message = e.user_friendly_message();
                Err(e)
            }
        }
    }

    /// Stores the new canvas size and redraws.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<&TriangleLayout> {
        self.canvas = Canvas::new(width, height);
        self.draw()
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn drawing(&self) -> Option<&TriangleLayout> {
        self.drawing.as_ref()
    }

    pub fn table(&self) -> Option<&TripletTable> {
        self.table.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FormInputs::default(), Canvas::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_with_defaults() {
        let mut session = Session::default();
        session.start();
        assert_eq!(session.drawing().unwrap().describe(), "a = 3, b = 4, c = 5");
        assert_eq!(session.table().unwrap().max_sum().get(), 100);
        assert!(session.message().ends_with(" Tripel gefunden."));
    }

    #[test]
    fn test_failed_draw_clears_drawing() {
        let mut session = Session::default();
        session.draw().unwrap();
        session.set_b("vier");
        assert!(session.draw().is_err());
        assert!(session.drawing().is_none());
        assert_eq!(session.message(), "Bitte Zahlen fuer a und b eingeben.");

        session.set_b("0");
        assert!(session.draw().is_err());
        assert_eq!(session.message(), "a und b muessen groesser als 0 sein.");

        session.set_b("4,0");
        assert!(session.draw().is_ok());
        assert_eq!(session.message(), "");
    }

    #[test]
    fn test_failed_find_keeps_previous_table() {
        let mut session = Session::default();
        session.set_max_sum("30");
        session.find().unwrap();
        assert_eq!(session.message(), "3 Tripel gefunden.");

        session.set_max_sum("-1");
        assert!(session.find().is_err());
        assert_eq!(session.message(), "Die Max Summe muss groesser als 0 sein.");
        assert_eq!(session.table().unwrap().len(), 3);

        session.set_max_sum("abc");
        assert!(session.find().is_err());
        assert_eq!(
            session.message(),
            "Bitte eine ganze Zahl fuer die Max Summe eingeben."
        );
        assert_eq!(session.table().unwrap().max_sum().get(), 30);
    }

    #[test]
    fn test_empty_result_message() {
        let mut session = Session::default();
        session.set_max_sum("11");
        let table = session.find().unwrap();
        assert!(table.is_empty());
        assert_eq!(session.message(), "Keine Tripel gefunden.");
    }

    #[test]
    fn test_resize_redraws() {
        let mut session = Session::default();
        let before = session.draw().unwrap().scale;
        let after = session.resize(1040, 760).unwrap().scale;
        assert_eq!(session.canvas(), Canvas::new(1040, 760));
        assert!(after > before);
    }
}
