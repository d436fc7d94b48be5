//! End-to-end dictation scenarios: transcripts, feed replays and exports.

use releve::export::{self, ExportFormat};
use releve::session::{ManualClock, parse_feed_log};
use releve::{
    DictationSession, FeedEvent, Interpreter, Inventory, InventoryRecord, Language,
    RecognitionError, SessionAction, SessionState,
};
use tempfile::TempDir;

struct TranscriptCase {
    language: Language,
    transcript: &'static str,
    location: &'static str,
    rooms: &'static [&'static str],
    description: &'static str,
}

#[test]
fn test_transcript_scenarios() {
    let cases = [
        TranscriptCase {
            language: Language::En,
            transcript: "location building a unit 2 ground floor there are the following rooms \
                         one kitchen one living room two bedrooms",
            location: "Building A - Unit 2 - Ground",
            rooms: &["Kitchen", "Living Room", "Bedroom 1", "Bedroom 2"],
            description: "English: full survey note",
        },
        TranscriptCase {
            language: Language::En,
            transcript: "kitchen kitchen kitchen, bathroom",
            location: "",
            rooms: &["Kitchen", "Bathroom"],
            description: "English: recognizer stutter collapsed",
        },
        TranscriptCase {
            language: Language::En,
            transcript: "kitchen, two bedrooms",
            location: "",
            rooms: &["Kitchen", "Bedroom 1", "Bedroom 2"],
            description: "English: no trigger keywords",
        },
        TranscriptCase {
            language: Language::Fr,
            transcript: "localisation bâtiment A logement 2 rez de chaussée il y a les pièces \
                         suivantes une cuisine, un séjour, deux chambres, deux WC séparés",
            location: "Bâtiment A - Logement 2 - RDC",
            rooms: &["Cuisine", "Séjour", "Chambre 1", "Chambre 2", "WC 1", "WC 2"],
            description: "French: full survey note with qualifier",
        },
        TranscriptCase {
            language: Language::Fr,
            transcript: "Localisation bâtiment C, 2e étage. Pièces : euh du coup on a une entrée, \
                         un w.-c., une s.d.b. et deux chambres",
            location: "Bâtiment C - 2e",
            rooms: &["Entrée", "WC", "Salle de bain", "Chambre 1", "Chambre 2"],
            description: "French: fillers and abbreviations",
        },
    ];

    for case in &cases {
        let interpreter = Interpreter::for_language(case.language).unwrap();
        let result = interpreter.parse(case.transcript);
        assert_eq!(result.location, case.location, "{}", case.description);
        assert_eq!(result.rooms, case.rooms, "{}", case.description);
    }
}

#[test]
fn test_french_feed_with_cumulative_resend() {
    let log = r#"
# engine resends the whole utterance once it grows
{"type":"final","text":"localisation bâtiment A logement 2 rez de chaussée","timestamp_ms":0}
{"type":"interim","text":"localisation bâtiment A logement 2 rez de chaussée il y a"}
{"type":"final","text":"localisation bâtiment A logement 2 rez de chaussée il y a les pièces suivantes une cuisine","timestamp_ms":3000}
{"type":"final","text":"une cuisine","timestamp_ms":3400}
{"type":"final","text":"et un séjour, deux chambres, deux WC séparés","timestamp_ms":7000}
"#;
    let events = parse_feed_log(log).unwrap();
    assert_eq!(events.len(), 5);

    let interpreter = Interpreter::for_language(Language::Fr).unwrap();
    let mut session = DictationSession::with_clock(interpreter, 2_000, ManualClock::new(0));
    assert_eq!(session.start().unwrap(), SessionAction::StartEngine);
    for event in events {
        assert_eq!(session.handle(event), SessionAction::None);
    }

    assert_eq!(
        session.buffer().as_str(),
        "localisation bâtiment A logement 2 rez de chaussée il y a les pièces suivantes \
         une cuisine et un séjour, deux chambres, deux WC séparés"
    );
    let parsed = session.interpretation();
    assert_eq!(parsed.location, "Bâtiment A - Logement 2 - RDC");
    assert_eq!(
        parsed.rooms,
        vec!["Cuisine", "Séjour", "Chambre 1", "Chambre 2", "WC 1", "WC 2"]
    );
}

#[test]
fn test_engine_restarts_until_stopped() {
    let interpreter = Interpreter::for_language(Language::En).unwrap();
    let mut session = DictationSession::with_clock(interpreter, 2_000, ManualClock::new(0));
    session.start().unwrap();

    session.handle(FeedEvent::final_at("rooms: kitchen", 0));
    assert_eq!(
        session.handle(FeedEvent::EngineStopped),
        SessionAction::RestartEngine
    );
    assert_eq!(
        session.handle(FeedEvent::Error {
            error: RecognitionError::NoSpeech
        }),
        SessionAction::None
    );
    session.handle(FeedEvent::final_at("a bathroom", 4_000));

    assert_eq!(session.stop(), SessionAction::StopEngine);
    assert_eq!(session.state(), SessionState::Stopping);
    assert_eq!(session.handle(FeedEvent::EngineStopped), SessionAction::None);
    assert_eq!(session.state(), SessionState::Idle);

    // Late fragments after stop are dropped
    session.handle(FeedEvent::final_at("a garage", 9_000));
    assert_eq!(session.interpretation().rooms, vec!["Kitchen", "Bathroom"]);
}

#[test]
fn test_manual_edit_then_export() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("survey").join("rows.json");

    let interpreter = Interpreter::for_language(Language::En).unwrap();
    let mut session = DictationSession::with_clock(interpreter, 2_000, ManualClock::new(0));
    session.start().unwrap();
    session.handle(FeedEvent::final_at("location unit 3 rooms: a kitchen", 0));
    let parsed = session
        .edit_buffer("location unit 4 rooms: a kitchen and two bedrooms")
        .clone();
    assert_eq!(parsed.location, "Unit 4");

    let mut inventory = Inventory::load(&store).unwrap();
    assert!(inventory.is_empty());
    assert_eq!(inventory.append(&parsed), 3);
    inventory.push(InventoryRecord::new("Unit \"B\"", "Hall"));
    inventory.save(&store).unwrap();

    let reloaded = Inventory::load(&store).unwrap();
    assert_eq!(reloaded.len(), 4);

    let csv = export::render(
        reloaded.rows(),
        ExportFormat::Csv,
        ("Location", "Room"),
        ';',
    )
    .unwrap();
    assert_eq!(
        csv,
        "Location;Room\n\
         \"Unit 4\";\"Kitchen\"\n\
         \"Unit 4\";\"Bedroom 1\"\n\
         \"Unit 4\";\"Bedroom 2\"\n\
         \"Unit \"\"B\"\"\";\"Hall\"\n"
    );

    let json = export::render(reloaded.rows(), ExportFormat::Json, ("Location", "Room"), ';').unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[3]["location"], "Unit \"B\"");
    assert_eq!(value[1]["room"], "Bedroom 1");
}
