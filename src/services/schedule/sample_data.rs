//! Fixture data for the sample agenda.

/// Names and clinical vocabulary the synthesizer draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    pub patients: Vec<String>,
    pub procedures: Vec<String>,
    pub complaints: Vec<String>,
}

impl SampleData {
    /// No fixtures at all; the synthesizer numbers its subjects instead.
    pub fn empty() -> Self {
        Self {
            patients: Vec::new(),
            procedures: Vec::new(),
            complaints: Vec::new(),
        }
    }
}

impl Default for SampleData {
    fn default() -> Self {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            patients: owned(&[
                "Maria Silva",
                "João Pereira",
                "Ana Costa",
                "Carlos Souza",
                "Fernanda Lima",
                "Ricardo Alves",
                "Juliana Rocha",
                "Paulo Mendes",
                "Beatriz Gomes",
                "Lucas Martins",
                "Camila Ribeiro",
                "Rafael Carvalho",
            ]),
            procedures: owned(&[
                "Kinesiotherapy",
                "Electrotherapy",
                "Manual therapy",
                "Hydrotherapy",
                "Postural reeducation",
                "Respiratory physiotherapy",
                "Gait training",
                "Initial assessment",
            ]),
            complaints: owned(&[
                "Lower back pain",
                "Knee sprain",
                "Post-operative shoulder",
                "Cervical pain",
                "Ankle fracture recovery",
                "Tendinitis",
                "Stroke rehabilitation",
            ]),
        }
    }
}
