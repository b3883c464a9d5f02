use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Club row from the `clubs` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Club {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "estado")]
    pub state: String,
}

/// Validated club payload for create and full update
#[derive(Debug, Clone, PartialEq)]
pub struct ClubInput {
    pub name: String,
    pub state: String,
}

/// Player row from the `players` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "dataNasc")]
    pub birth_date: NaiveDate,
    #[serde(rename = "salario")]
    pub salary: f64,
    #[serde(rename = "nacionalidade")]
    pub nationality: String,
    #[serde(rename = "timeId")]
    pub club_id: i64,
    #[serde(rename = "posicao")]
    pub position: String,
}

/// Validated player payload for create and full update
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInput {
    pub name: String,
    pub birth_date: NaiveDate,
    pub salary: f64,
    pub nationality: String,
    pub club_id: i64,
    pub position: String,
}

/// Subset of player fields supplied to a partial update.
/// `None` means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub salary: Option<f64>,
    pub nationality: Option<String>,
    pub club_id: Option<i64>,
    pub position: Option<String>,
}

impl PlayerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.birth_date.is_none()
            && self.salary.is_none()
            && self.nationality.is_none()
            && self.club_id.is_none()
            && self.position.is_none()
    }
}

/// Row from the players/clubs join used by the player listing
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerClubRow {
    pub id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub salary: f64,
    pub nationality: String,
    pub club_id: i64,
    pub position: String,
    pub club_name: String,
    pub club_state: String,
}

/// Player as listed: stored fields, the owning club and the computed age
#[derive(Debug, Clone, Serialize)]
pub struct PlayerListing {
    #[serde(flatten)]
    pub player: Player,
    pub time: Club,
    pub idade: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Transport {
    Aereo,
    Maritimo,
    Terrestre,
}

impl Transport {
    pub const ALL: [Transport; 3] = [Transport::Aereo, Transport::Maritimo, Transport::Terrestre];

    pub fn as_str(self) -> &'static str {
        match self {
            Transport::Aereo => "AEREO",
            Transport::Maritimo => "MARITIMO",
            Transport::Terrestre => "TERRESTRE",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

/// Trip row from the `trips` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Trip {
    pub id: i64,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "transporte")]
    pub transport: Transport,
    #[serde(rename = "preco")]
    pub price: f64,
    /// Length of the trip in days
    #[serde(rename = "duracao")]
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripInput {
    pub destination: String,
    pub transport: Transport,
    pub price: f64,
    pub duration: i64,
}

/// Trip projection returned by the destination-ordered listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TripDigest {
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "duracao")]
    pub duration: i64,
}

/// Raw aggregate row; averages are NULL when there are no trips
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct TripAggregate {
    pub avg_price: Option<f64>,
    pub avg_duration: Option<f64>,
}

/// Flat averages returned by `/viagens/resumo/media`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub preco: Option<f64>,
    pub duracao: Option<f64>,
}
