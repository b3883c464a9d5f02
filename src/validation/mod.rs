//! Field rules for inbound payloads.
//!
//! Each entry point takes the raw JSON body and returns either a typed
//! record or every issue found, in field order. Full validation requires
//! all fields; `player_patch` checks only the fields that are present.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::mapper;
use crate::models::{ClubInput, PlayerInput, PlayerPatch, Transport, TripInput};

const REQUIRED: &str = "Campo obrigatório";
const EXPECTED_OBJECT: &str = "Esperado um objeto JSON";
const EXPECTED_TEXT: &str = "Esperado texto";
const EXPECTED_NUMBER: &str = "Esperado número";
const EXPECTED_INTEGER: &str = "Esperado número inteiro";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub field: String,
    pub message: String,
}

impl Issue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered list of validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Issues(Vec<Issue>);

impl Issues {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![Issue::new(field, message)])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// Whether any issue is reported for `field`
    pub fn mentions(&self, field: &str) -> bool {
        self.0.iter().any(|issue| issue.field == field)
    }

    fn push(&mut self, field: &str, message: &str) {
        self.0.push(Issue::new(field, message));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Full,
    Partial,
}

/// Reads typed fields out of a JSON object, collecting issues as it goes
struct Fields<'a> {
    object: &'a Map<String, Value>,
    mode: Mode,
    issues: Issues,
}

impl<'a> Fields<'a> {
    fn new(input: &'a Value, mode: Mode) -> Result<Self, Issues> {
        match input {
            Value::Object(object) => Ok(Self {
                object,
                mode,
                issues: Issues::default(),
            }),
            _ => Err(Issues::single("", EXPECTED_OBJECT)),
        }
    }

    fn value(&mut self, field: &str) -> Option<&'a Value> {
        let value = self.object.get(field);
        if value.is_none() && self.mode == Mode::Full {
            self.issues.push(field, REQUIRED);
        }
        value
    }

    fn text(&mut self, field: &str) -> Option<String> {
        match self.value(field)? {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.issues.push(field, EXPECTED_TEXT);
                None
            }
        }
    }

    fn text_min(&mut self, field: &str, min: usize, message: &str) -> Option<String> {
        let text = self.text(field)?;
        self.check(field, text.chars().count() >= min, message)
            .then_some(text)
    }

    fn text_exact(&mut self, field: &str, len: usize, message: &str) -> Option<String> {
        let text = self.text(field)?;
        self.check(field, text.chars().count() == len, message)
            .then_some(text)
    }

    fn date(&mut self, field: &str, message: &str) -> Option<NaiveDate> {
        let text = self.text(field)?;
        let date = mapper::parse_date(&text);
        if date.is_none() {
            self.issues.push(field, message);
        }
        date
    }

    fn number(&mut self, field: &str) -> Option<f64> {
        let number = self.value(field)?.as_f64();
        if number.is_none() {
            self.issues.push(field, EXPECTED_NUMBER);
        }
        number
    }

    fn integer(&mut self, field: &str) -> Option<i64> {
        let value = self.value(field)?;
        let integer = value.as_i64().or_else(|| {
            // 3.0 is an integer for JSON clients
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        });
        if integer.is_none() {
            self.issues.push(field, EXPECTED_INTEGER);
        }
        integer
    }

    fn transport(&mut self, field: &str, message: &str) -> Option<Transport> {
        let text = self.text(field)?;
        let transport = Transport::from_name(&text);
        if transport.is_none() {
            self.issues.push(field, message);
        }
        transport
    }

    fn check(&mut self, field: &str, ok: bool, message: &str) -> bool {
        if !ok {
            self.issues.push(field, message);
        }
        ok
    }

    /// Hands back the record only when no issue was recorded
    fn finish<T>(self, record: Option<T>) -> Result<T, Issues> {
        match record {
            Some(record) if self.issues.is_empty() => Ok(record),
            _ => Err(self.issues),
        }
    }
}

pub fn club(input: &Value) -> Result<ClubInput, Issues> {
    let mut fields = Fields::new(input, Mode::Full)?;

    let name = fields.text_min("nome", 3, "Nome deve ter, no mínimo, 3 caracteres");
    let state = fields.text_exact("estado", 2, "Estado deve possuir 2 caracteres");

    let record = match (name, state) {
        (Some(name), Some(state)) => Some(ClubInput { name, state }),
        _ => None,
    };
    fields.finish(record)
}

const PLAYER_NAME: &str = "Nome deve ter, no mínimo, 4 caracteres";
const PLAYER_BIRTH_DATE: &str = "Informe uma data válida no formato Y-MM-DD";
const PLAYER_POSITION: &str = "A posição deve ter no mínimo 4 caracteres";

pub fn player(input: &Value) -> Result<PlayerInput, Issues> {
    let mut fields = Fields::new(input, Mode::Full)?;
    let patch = read_player(&mut fields);

    let record = match patch {
        PlayerPatch {
            name: Some(name),
            birth_date: Some(birth_date),
            salary: Some(salary),
            nationality: Some(nationality),
            club_id: Some(club_id),
            position: Some(position),
        } => Some(PlayerInput {
            name,
            birth_date,
            salary,
            nationality,
            club_id,
            position,
        }),
        _ => None,
    };
    fields.finish(record)
}

/// Partial player validation: absent fields are left out of the patch
pub fn player_patch(input: &Value) -> Result<PlayerPatch, Issues> {
    let mut fields = Fields::new(input, Mode::Partial)?;
    let patch = read_player(&mut fields);
    fields.finish(Some(patch))
}

fn read_player(fields: &mut Fields<'_>) -> PlayerPatch {
    PlayerPatch {
        name: fields.text_min("nome", 4, PLAYER_NAME),
        birth_date: fields.date("dataNasc", PLAYER_BIRTH_DATE),
        salary: fields.number("salario"),
        nationality: fields.text("nacionalidade"),
        club_id: fields.integer("timeId"),
        position: fields.text_min("posicao", 4, PLAYER_POSITION),
    }
}

pub fn trip(input: &Value) -> Result<TripInput, Issues> {
    let mut fields = Fields::new(input, Mode::Full)?;

    let destination = fields.text_min("destino", 3, "Destino deve ter, no mínimo, 3 caracteres");
    let transport = fields.transport("transporte", "Transporte deve ser AEREO, MARITIMO ou TERRESTRE");
    let price = fields.number("preco");
    let duration = fields.integer("duracao");

    let record = match (destination, transport, price, duration) {
        (Some(destination), Some(transport), Some(price), Some(duration)) => Some(TripInput {
            destination,
            transport,
            price,
            duration,
        }),
        _ => None,
    };
    fields.finish(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(issues: &Issues) -> Vec<(&str, &str)> {
        issues
            .iter()
            .map(|i| (i.field.as_str(), i.message.as_str()))
            .collect()
    }

    fn valid_player() -> Value {
        json!({
            "nome": "Pedro Guilherme",
            "dataNasc": "1997-06-20",
            "salario": 850000,
            "nacionalidade": "Brasileira",
            "timeId": 1,
            "posicao": "Atacante"
        })
    }

    #[test]
    fn test_club_accepts_valid_payload() {
        let club = club(&json!({"nome": "Flamengo", "estado": "RJ"})).unwrap();
        assert_eq!(club.name, "Flamengo");
        assert_eq!(club.state, "RJ");
    }

    #[test]
    fn test_club_rejects_short_name() {
        let issues = club(&json!({"nome": "SC", "estado": "RJ"})).unwrap_err();
        assert_eq!(messages(&issues), vec![("nome", "Nome deve ter, no mínimo, 3 caracteres")]);
    }

    #[test]
    fn test_club_state_must_be_exactly_two_chars() {
        for state in ["R", "RJS", ""] {
            let issues = club(&json!({"nome": "Vasco", "estado": state})).unwrap_err();
            assert!(issues.mentions("estado"), "state {state:?} should be rejected");
        }
    }

    #[test]
    fn test_club_reports_all_issues_in_field_order() {
        let issues = club(&json!({})).unwrap_err();
        assert_eq!(
            messages(&issues),
            vec![("nome", REQUIRED), ("estado", REQUIRED)]
        );
    }

    #[test]
    fn test_non_object_input_is_rejected() {
        let issues = club(&json!(["Flamengo", "RJ"])).unwrap_err();
        assert_eq!(messages(&issues), vec![("", EXPECTED_OBJECT)]);
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // "Ceará" is 5 chars but 6 bytes; "Sã" is 2 chars but 3 bytes
        assert!(club(&json!({"nome": "Ceará", "estado": "CE"})).is_ok());
        assert!(club(&json!({"nome": "Sã", "estado": "SP"})).is_err());
        assert!(club(&json!({"nome": "Grêmio", "estado": "RS"})).is_ok());
    }

    #[test]
    fn test_player_accepts_valid_payload() {
        let player = player(&valid_player()).unwrap();
        assert_eq!(player.birth_date, NaiveDate::from_ymd_opt(1997, 6, 20).unwrap());
        assert_eq!(player.salary, 850000.0);
        assert_eq!(player.club_id, 1);
    }

    #[test]
    fn test_player_rejects_invalid_date() {
        let mut body = valid_player();
        body["dataNasc"] = json!("20/06/1997");
        let issues = player(&body).unwrap_err();
        assert_eq!(messages(&issues), vec![("dataNasc", PLAYER_BIRTH_DATE)]);
    }

    #[test]
    fn test_player_type_mismatches() {
        let mut body = valid_player();
        body["salario"] = json!("muito");
        body["timeId"] = json!(1.5);
        body["nacionalidade"] = json!(42);
        let issues = player(&body).unwrap_err();
        assert_eq!(
            messages(&issues),
            vec![
                ("salario", EXPECTED_NUMBER),
                ("nacionalidade", EXPECTED_TEXT),
                ("timeId", EXPECTED_INTEGER),
            ]
        );
    }

    #[test]
    fn test_player_short_position_and_missing_name() {
        let mut body = valid_player();
        body.as_object_mut().unwrap().remove("nome");
        body["posicao"] = json!("ZAG");
        let issues = player(&body).unwrap_err();
        assert_eq!(
            messages(&issues),
            vec![("nome", REQUIRED), ("posicao", PLAYER_POSITION)]
        );
    }

    #[test]
    fn test_patch_accepts_salary_only() {
        let patch = player_patch(&json!({"salario": 5000})).unwrap();
        assert_eq!(
            patch,
            PlayerPatch {
                salary: Some(5000.0),
                ..PlayerPatch::default()
            }
        );
    }

    #[test]
    fn test_patch_keeps_every_supplied_field() {
        let patch = player_patch(&json!({"salario": 5000, "posicao": "Goleiro"})).unwrap();
        assert_eq!(patch.salary, Some(5000.0));
        assert_eq!(patch.position.as_deref(), Some("Goleiro"));
        assert_eq!(patch.name, None);
    }

    #[test]
    fn test_patch_validates_present_fields() {
        let issues = player_patch(&json!({"nome": "Leo", "salario": null})).unwrap_err();
        assert_eq!(
            messages(&issues),
            vec![("nome", PLAYER_NAME), ("salario", EXPECTED_NUMBER)]
        );
    }

    #[test]
    fn test_empty_patch_is_valid() {
        let patch = player_patch(&json!({})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let patch = player_patch(&json!({"idade": 30})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_trip_rules() {
        let trip = trip(&json!({
            "destino": "Salvador",
            "transporte": "AEREO",
            "preco": 1899.9,
            "duracao": 7
        }))
        .unwrap();
        assert_eq!(trip.transport, Transport::Aereo);
        assert_eq!(trip.duration, 7);

        let issues = super::trip(&json!({
            "destino": "Rj",
            "transporte": "FOGUETE",
            "preco": 100,
            "duracao": 2.5
        }))
        .unwrap_err();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["destino", "transporte", "duracao"]);
    }
}
