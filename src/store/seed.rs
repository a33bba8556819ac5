//! Seed data loading and validation
//!
//! The content store is built once per session from a `SeedData` value. It
//! can come from a JSON or TOML file, or from the built-in sample content.

use std::collections::HashSet;
use std::path::Path;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::models::{Download, Event, Faq, FlashCard, Question, RuleUpdate};
use crate::utils::errors::{PortalError, Result};

/// All collections the store starts with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub flashcards: Vec<FlashCard>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub downloads: Vec<Download>,
    #[serde(default)]
    pub rule_updates: Vec<RuleUpdate>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl SeedData {
    /// Load seed data from a `.json` or `.toml` file and validate it
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading seed data");

        let raw = std::fs::read_to_string(path)?;
        let seed: SeedData = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&raw)?,
            Some("toml") => toml::from_str(&raw)?,
            _ => {
                return Err(PortalError::Seed(format!(
                    "Unsupported seed file format: {}",
                    path.display()
                )))
            }
        };

        seed.validate()?;
        info!(
            path = %path.display(),
            questions = seed.questions.len(),
            events = seed.events.len(),
            "Seed data loaded"
        );
        Ok(seed)
    }

    /// Check the invariants the store relies on
    pub fn validate(&self) -> Result<()> {
        ensure_unique_ids("question", self.questions.iter().map(|q| q.id.as_str()))?;
        ensure_unique_ids("flashcard", self.flashcards.iter().map(|c| c.id.as_str()))?;
        ensure_unique_ids("faq", self.faqs.iter().map(|f| f.id.as_str()))?;
        ensure_unique_ids("download", self.downloads.iter().map(|d| d.id.as_str()))?;
        ensure_unique_ids("rule update", self.rule_updates.iter().map(|r| r.id.as_str()))?;
        ensure_unique_ids("event", self.events.iter().map(|e| e.id.as_str()))?;

        for question in &self.questions {
            if question.options.is_empty() {
                return Err(PortalError::Seed(format!("Question {} has no options", question.id)));
            }
            if !question.has_valid_key() {
                return Err(PortalError::Seed(format!(
                    "Question {} marks option {} correct but has only {} options",
                    question.id,
                    question.correct_answer,
                    question.options.len()
                )));
            }
        }

        for event in &self.events {
            if event.max_participants == 0 {
                return Err(PortalError::Seed(format!("Event {} has no capacity", event.id)));
            }
            if event.participants.len() > event.max_participants as usize {
                return Err(PortalError::Seed(format!(
                    "Event {} lists {} participants for {} places",
                    event.id,
                    event.participants.len(),
                    event.max_participants
                )));
            }
        }

        Ok(())
    }

    /// The association's sample content
    pub fn builtin() -> Self {
        Self {
            questions: vec![
                question(
                    "1",
                    "Welche der folgenden Aktionen resultiert in einem direkten Freistoß?",
                    &["Abseits", "Gefährliches Spiel", "Behinderung ohne Kontakt", "Treten eines Gegners"],
                    3,
                    "Treten eines Gegners ist ein Foulspiel, das mit einem direkten Freistoß geahndet wird.",
                    "Regelwerk",
                    "Einfach",
                ),
                question(
                    "2",
                    "Ein Spieler tritt den Ball zu seinem Torhüter zurück. Der Torhüter nimmt den Ball mit den Händen auf. Die korrekte Entscheidung ist:",
                    &[
                        "Weiterspielen",
                        "Indirekter Freistoß dort, wo der Torhüter den Ball aufgenommen hat",
                        "Direkter Freistoß",
                        "Eckstoß",
                    ],
                    1,
                    "Bei einem absichtlichen Rückpass mit dem Fuß zum eigenen Torhüter darf dieser den Ball nicht mit den Händen aufnehmen.",
                    "Regelwerk",
                    "Mittel",
                ),
                question(
                    "3",
                    "Wer führt den Münzwurf vor dem Spielbeginn durch?",
                    &["Schiedsrichter", "Schiedsrichterassistent", "Vierter Offizieller", "Die Mannschaftskapitäne"],
                    0,
                    "Der Schiedsrichter führt den Münzwurf durch, bei dem die Mannschaft, die gewinnt, entscheidet, auf welches Tor sie in der ersten Halbzeit spielt.",
                    "Spielvorbereitung",
                    "Einfach",
                ),
            ],
            flashcards: vec![
                flashcard(
                    "1",
                    "Abseits",
                    "Ein Spieler befindet sich in einer Abseitsposition, wenn er der gegnerischen Torlinie näher ist als der Ball und der vorletzte Gegenspieler.",
                    "Regelwerk",
                ),
                flashcard(
                    "2",
                    "Vorteil",
                    "Der Schiedsrichter kann das Spiel weiterlaufen lassen, wenn die Mannschaft, gegen die sich ein Vergehen richtet, dadurch einen Vorteil erlangt.",
                    "Schiedsrichterentscheidungen",
                ),
                flashcard(
                    "3",
                    "Strafstoß",
                    "Ein Strafstoß wird verhängt, wenn ein Spieler innerhalb seines eigenen Strafraums ein Vergehen begeht, das mit einem direkten Freistoß zu ahnden ist.",
                    "Regelwerk",
                ),
            ],
            faqs: vec![
                faq(
                    "1",
                    "Wann muss ich für einen Spieleinsatz absagen?",
                    "Absagen sollten mindestens 7 Tage vor dem Spieltermin erfolgen, damit ein Ersatz gefunden werden kann.",
                    "Organisation",
                ),
                faq(
                    "2",
                    "Wie viele Pflichtsitzungen muss ich pro Saison besuchen?",
                    "Jeder aktive Schiedsrichter muss mindestens 4 Pflichtsitzungen pro Saison besuchen, um seinen Status zu behalten.",
                    "Organisation",
                ),
                faq(
                    "3",
                    "Was passiert bei einem Spielabbruch?",
                    "Bei einem Spielabbruch muss ein ausführlicher Sonderbericht erstellt und innerhalb von 24 Stunden an den zuständigen Spielausschuss gesendet werden.",
                    "Regelwerk",
                ),
            ],
            downloads: vec![
                download(
                    "1",
                    "Aktuelles Regelwerk 2025",
                    "Die vollständige aktuelle Version des Regelwerks als PDF.",
                    "/downloads/regelwerk_2025.pdf",
                    "Regelwerk",
                    (2025, 7, 1),
                ),
                download(
                    "2",
                    "Präsentation: Handspiel",
                    "Schulungsmaterial zum Thema Handspielauslegung mit Beispielen.",
                    "/downloads/handspiel_praesentation.pdf",
                    "Schulungsmaterial",
                    (2025, 6, 15),
                ),
                download(
                    "3",
                    "Spielberichtsbogen",
                    "Ausfüllbarer Spielberichtsbogen für Notfälle ohne Online-Zugang.",
                    "/downloads/spielberichtsbogen.pdf",
                    "Formulare",
                    (2025, 5, 20),
                ),
            ],
            rule_updates: vec![
                rule_update(
                    "1",
                    "Änderung der Handspielregel",
                    "Klarstellung zur Interpretation der Handspielregel",
                    (2025, 7, 1),
                    "Ab der Saison 2025/26 gilt: Ein Handspiel liegt vor, wenn ein Spieler den Ball absichtlich mit der Hand oder dem Arm berührt oder seine Körperfläche damit unnatürlich vergrößert. Die Position der Hand in Relation zum Körper wird nun genauer definiert.",
                ),
                rule_update(
                    "2",
                    "Neue Regelung bei Auswechslungen",
                    "Änderungen beim Auswechselvorgang",
                    (2025, 6, 15),
                    "Ausgewechselte Spieler müssen künftig das Spielfeld an der nächstgelegenen Begrenzungslinie verlassen, um Spielverzögerungen zu vermeiden.",
                ),
            ],
            events: vec![
                event(
                    "1",
                    "Lehrabend: Regeländerungen 2025",
                    "Vorstellung der neuen Regeländerungen für die kommende Saison mit praktischen Beispielen.",
                    (2025, 8, 15),
                    (19, 0),
                    "Sportheim SV Beispiel",
                    30,
                ),
                event(
                    "2",
                    "Praxistraining: Stellungsspiel",
                    "Praktisches Training zum Thema Stellungsspiel auf dem Platz mit Videoanalyse.",
                    (2025, 8, 22),
                    (18, 0),
                    "Sportplatz FC Muster",
                    20,
                ),
            ],
        }
    }
}

fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PortalError::Seed(format!("Duplicate {} id: {}", kind, id)));
        }
    }
    Ok(())
}

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn question(
    id: &str,
    text: &str,
    options: &[&str],
    correct_answer: usize,
    explanation: &str,
    category: &str,
    difficulty: &str,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
        explanation: explanation.to_string(),
        category: category.to_string(),
        difficulty: difficulty.to_string(),
    }
}

fn flashcard(id: &str, term: &str, definition: &str, category: &str) -> FlashCard {
    FlashCard {
        id: id.to_string(),
        term: term.to_string(),
        definition: definition.to_string(),
        category: category.to_string(),
    }
}

fn faq(id: &str, question: &str, answer: &str, category: &str) -> Faq {
    Faq {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
    }
}

fn download(
    id: &str,
    title: &str,
    description: &str,
    file_url: &str,
    category: &str,
    upload_date: (i32, u32, u32),
) -> Download {
    Download {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        file_url: file_url.to_string(),
        category: category.to_string(),
        upload_date: date(upload_date),
    }
}

fn rule_update(id: &str, title: &str, description: &str, effective: (i32, u32, u32), details: &str) -> RuleUpdate {
    RuleUpdate {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date(effective),
        details: details.to_string(),
    }
}

fn event(
    id: &str,
    title: &str,
    description: &str,
    day: (i32, u32, u32),
    (hour, minute): (u32, u32),
    location: &str,
    max_participants: u32,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date(day),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
        location: location.to_string(),
        max_participants,
        participants: Vec::new(),
        waitlist: Vec::new(),
    }
}
