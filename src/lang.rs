use rocket::request::FromParam;
use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Language of the text bundle shown to guests. Arabic is the house default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FromFormField,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Locale::Ar => Locale::En,
            Locale::En => Locale::Ar,
        }
    }

    /// Text direction for the rendered page.
    pub fn direction(self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            Locale::En => "ltr",
        }
    }
}

impl<'r> FromParam<'r> for Locale {
    type Error = &'r str;

    fn from_param(param: &'r str) -> Result<Self, Self::Error> {
        match param {
            "ar" => Ok(Locale::Ar),
            "en" => Ok(Locale::En),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstructionStrings {
    pub title: String,
    pub steps: Vec<Step>,
    pub start_playing: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreSheetStrings {
    pub title: String,
    pub hole: String,
    pub total: String,
    pub show_results: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsStrings {
    pub title: String,
    pub podium: String,
    pub rank: String,
    pub points: String,
}

/// Structured text bundle for one locale, injected into every template
/// context.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenStrings {
    pub title: String,
    pub player_count: String,
    pub start_registration: String,
    pub player_info: String,
    pub name: String,
    pub next: String,
    pub language_button: String,
    pub direction: &'static str,
    pub instructions: InstructionStrings,
    pub score_sheet: ScoreSheetStrings,
    pub results: ResultsStrings,
}

impl ScreenStrings {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ar => Self::arabic(),
            Locale::En => Self::english(),
        }
    }

    fn arabic() -> Self {
        Self {
            title: "تسجيل اللاعبين".to_string(),
            player_count: "عدد اللاعبين".to_string(),
            start_registration: "ابدأ التسجيل".to_string(),
            player_info: "معلومات اللاعب".to_string(),
            name: "الاسم".to_string(),
            next: "التالي".to_string(),
            language_button: "English".to_string(),
            direction: Locale::Ar.direction(),
            instructions: InstructionStrings {
                title: "تعليمات اللعب".to_string(),
                steps: vec![
                    Step {
                        title: "استلام المضرب والكرة".to_string(),
                        description: "توجه إلى مكتب الاستقبال لاستلام المضرب والكرة الخاصة بك"
                            .to_string(),
                    },
                    Step {
                        title: "قواعد اللعب".to_string(),
                        description: "احرص على ضرب الكرة بلطف وتوجيهها نحو الهدف".to_string(),
                    },
                    Step {
                        title: "تسجيل النقاط".to_string(),
                        description: "سجل عدد الضربات التي احتجتها لإدخال الكرة في كل حفرة"
                            .to_string(),
                    },
                    Step {
                        title: "إنهاء اللعبة".to_string(),
                        description: "بعد الانتهاء، قم بإعادة المعدات إلى مكتب الاستقبال"
                            .to_string(),
                    },
                ],
                start_playing: "ابدأ اللعب".to_string(),
            },
            score_sheet: ScoreSheetStrings {
                title: "سجل النقاط".to_string(),
                hole: "الحفرة".to_string(),
                total: "المجموع".to_string(),
                show_results: "إظهار النتائج".to_string(),
            },
            results: ResultsStrings {
                title: "النتائج النهائية".to_string(),
                podium: "منصة التتويج".to_string(),
                rank: "المركز".to_string(),
                points: "النقاط".to_string(),
            },
        }
    }

    fn english() -> Self {
        Self {
            title: "Player Registration".to_string(),
            player_count: "Number of Players".to_string(),
            start_registration: "Start Registration".to_string(),
            player_info: "Player Information".to_string(),
            name: "Name".to_string(),
            next: "Next".to_string(),
            language_button: "عربي".to_string(),
            direction: Locale::En.direction(),
            instructions: InstructionStrings {
                title: "Game Instructions".to_string(),
                steps: vec![
                    Step {
                        title: "Get Your Equipment".to_string(),
                        description: "Go to the reception desk to get your putter and ball"
                            .to_string(),
                    },
                    Step {
                        title: "Playing Rules".to_string(),
                        description: "Make sure to hit the ball gently and aim for the target"
                            .to_string(),
                    },
                    Step {
                        title: "Score Keeping".to_string(),
                        description:
                            "Record the number of strokes it takes to get the ball in each hole"
                                .to_string(),
                    },
                    Step {
                        title: "End Game".to_string(),
                        description: "After finishing, return the equipment to the reception desk"
                            .to_string(),
                    },
                ],
                start_playing: "Start Playing".to_string(),
            },
            score_sheet: ScoreSheetStrings {
                title: "Score Sheet".to_string(),
                hole: "Hole".to_string(),
                total: "Total".to_string(),
                show_results: "Show Results".to_string(),
            },
            results: ResultsStrings {
                title: "Final Results".to_string(),
                podium: "Podium".to_string(),
                rank: "Rank".to_string(),
                points: "Points".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_both_locales() {
        assert_eq!(Locale::Ar.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled(), Locale::Ar);
    }

    #[test]
    fn both_bundles_carry_four_instruction_steps() {
        for locale in [Locale::Ar, Locale::En] {
            let strings = ScreenStrings::for_locale(locale);
            assert_eq!(strings.instructions.steps.len(), 4);
        }
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(ScreenStrings::for_locale(Locale::Ar).direction, "rtl");
        assert_eq!(ScreenStrings::for_locale(Locale::En).direction, "ltr");
    }
}
