use std::str::FromStr;

use async_trait::async_trait;
use forma_domain::{BodyPart, CatalogRepository, Exercise, ExerciseId, ReadError, StorageError};
use log::warn;

/// Transport used by [`ExerciseDb`] to perform HTTP GET requests.
#[async_trait]
pub trait SendRequest {
    async fn get(&self, url: &str) -> Result<Response, StorageError>;
}

pub struct Response {
    pub status: u16,
    pub body: String,
}

/// Transport sending requests to a RapidAPI host.
pub struct ReqwestSendRequest {
    client: reqwest::Client,
    api_key: String,
    api_host: String,
}

impl ReqwestSendRequest {
    #[must_use]
    pub fn new(api_key: &str, api_host: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            api_host: api_host.to_string(),
        }
    }
}

#[async_trait]
impl SendRequest for ReqwestSendRequest {
    async fn get(&self, url: &str) -> Result<Response, StorageError> {
        let response = self
            .client
            .get(url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await
            .map_err(|_| StorageError::NoConnection)?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| StorageError::Other(Box::new(err)))?;
        Ok(Response { status, body })
    }
}

/// Exercise catalog served by the ExerciseDB REST API.
pub struct ExerciseDb<S> {
    transport: S,
    base_url: String,
}

impl<S: SendRequest> ExerciseDb<S> {
    #[must_use]
    pub fn new(transport: S, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ReadError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.transport.get(&url).await?;
        match response.status {
            200..=299 => serde_json::from_str(&response.body)
                .map_err(|err| ReadError::Other(Box::new(err))),
            404 => Err(ReadError::NotFound),
            status => Err(ReadError::Storage(StorageError::Other(
                format!("unexpected status code {status}").into(),
            ))),
        }
    }

    async fn fetch_exercises(&self, path: &str) -> Result<Vec<Exercise>, ReadError> {
        Ok(into_exercises(self.fetch(path).await?))
    }
}

impl<S: SendRequest> CatalogRepository for ExerciseDb<S> {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        self.fetch_exercises("/exercises").await
    }

    async fn read_exercises_by_body_part(
        &self,
        body_part: BodyPart,
    ) -> Result<Vec<Exercise>, ReadError> {
        self.fetch_exercises(&format!("/exercises/bodyPart/{body_part}"))
            .await
    }

    async fn read_exercises_by_target(&self, target: &str) -> Result<Vec<Exercise>, ReadError> {
        self.fetch_exercises(&format!("/exercises/target/{target}"))
            .await
    }

    async fn read_exercises_by_equipment(
        &self,
        equipment: &str,
    ) -> Result<Vec<Exercise>, ReadError> {
        self.fetch_exercises(&format!("/exercises/equipment/{equipment}"))
            .await
    }

    async fn read_exercises_by_name(&self, name: &str) -> Result<Vec<Exercise>, ReadError> {
        self.fetch_exercises(&format!("/exercises/name/{name}"))
            .await
    }

    async fn read_exercise(&self, id: &ExerciseId) -> Result<Exercise, ReadError> {
        let dto: ExerciseDto = self.fetch(&format!("/exercises/exercise/{id}")).await?;
        Exercise::try_from(dto).map_err(|err| ReadError::Other(Box::new(err)))
    }

    async fn read_body_parts(&self) -> Result<Vec<String>, ReadError> {
        self.fetch("/exercises/bodyPartList").await
    }

    async fn read_equipment(&self) -> Result<Vec<String>, ReadError> {
        self.fetch("/exercises/equipmentList").await
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseDto {
    id: String,
    name: String,
    body_part: String,
    target: String,
    equipment: String,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    gif_url: Option<String>,
}

impl TryFrom<ExerciseDto> for Exercise {
    type Error = strum::ParseError;

    fn try_from(dto: ExerciseDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id.into(),
            name: dto.name,
            body_part: BodyPart::from_str(&dto.body_part)?,
            target: dto.target,
            equipment: dto.equipment,
            instructions: dto.instructions,
            gif_url: dto.gif_url,
        })
    }
}

/// Records with a body part the catalog model does not know are dropped.
fn into_exercises(dtos: Vec<ExerciseDto>) -> Vec<Exercise> {
    dtos.into_iter()
        .filter_map(|dto| {
            let body_part = dto.body_part.clone();
            Exercise::try_from(dto)
                .inspect_err(|_| {
                    warn!("dropping exercise with unrecognized body part {body_part:?}");
                })
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    struct FakeSendRequest {
        result: Result<(u16, &'static str), ()>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeSendRequest {
        fn respond(status: u16, body: &'static str) -> Self {
            Self {
                result: Ok((status, body)),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                result: Err(()),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SendRequest for &FakeSendRequest {
        async fn get(&self, url: &str) -> Result<Response, StorageError> {
            self.requests.lock().unwrap().push(url.to_string());
            match self.result {
                Ok((status, body)) => Ok(Response {
                    status,
                    body: body.to_string(),
                }),
                Err(()) => Err(StorageError::NoConnection),
            }
        }
    }

    const EXERCISES_JSON: &str = r#"[
        {
            "id": "0001",
            "name": "Push-ups",
            "bodyPart": "chest",
            "target": "pectorals",
            "equipment": "body weight",
            "instructions": ["Start in a plank position."],
            "gifUrl": "https://example.org/0001.gif"
        },
        {
            "id": "0002",
            "name": "Mystery Move",
            "bodyPart": "forearms",
            "target": "forearms",
            "equipment": "body weight"
        }
    ]"#;

    #[tokio::test]
    async fn test_read_exercises() {
        let transport = FakeSendRequest::respond(200, EXERCISES_JSON);
        let catalog = ExerciseDb::new(&transport, "https://exercisedb.test");

        let exercises = catalog.read_exercises().await.unwrap();

        assert_eq!(
            exercises,
            vec![Exercise {
                id: "0001".into(),
                name: String::from("Push-ups"),
                body_part: BodyPart::Chest,
                target: String::from("pectorals"),
                equipment: String::from("body weight"),
                instructions: vec![String::from("Start in a plank position.")],
                gif_url: Some(String::from("https://example.org/0001.gif")),
            }]
        );
        assert_eq!(
            *transport.requests.lock().unwrap(),
            vec![String::from("https://exercisedb.test/exercises")]
        );
    }

    #[tokio::test]
    async fn test_request_paths() {
        let transport = FakeSendRequest::respond(200, "[]");
        let catalog = ExerciseDb::new(&transport, "https://exercisedb.test/");

        catalog
            .read_exercises_by_body_part(BodyPart::UpperLegs)
            .await
            .unwrap();
        catalog.read_exercises_by_target("pectorals").await.unwrap();
        catalog
            .read_exercises_by_equipment("barbell")
            .await
            .unwrap();
        catalog.read_exercises_by_name("push").await.unwrap();

        assert_eq!(
            *transport.requests.lock().unwrap(),
            vec![
                String::from("https://exercisedb.test/exercises/bodyPart/upper legs"),
                String::from("https://exercisedb.test/exercises/target/pectorals"),
                String::from("https://exercisedb.test/exercises/equipment/barbell"),
                String::from("https://exercisedb.test/exercises/name/push"),
            ]
        );
    }

    #[tokio::test]
    async fn test_read_exercise() {
        let transport = FakeSendRequest::respond(
            200,
            r#"{
                "id": "0001",
                "name": "Push-ups",
                "bodyPart": "chest",
                "target": "pectorals",
                "equipment": "body weight"
            }"#,
        );
        let catalog = ExerciseDb::new(&transport, "https://exercisedb.test");

        let exercise = catalog.read_exercise(&"0001".into()).await.unwrap();

        assert_eq!(exercise.name, "Push-ups");
        assert_eq!(exercise.instructions, Vec::<String>::new());
        assert_eq!(exercise.gif_url, None);
        assert_eq!(
            *transport.requests.lock().unwrap(),
            vec![String::from(
                "https://exercisedb.test/exercises/exercise/0001"
            )]
        );
    }

    #[tokio::test]
    async fn test_read_body_parts() {
        let transport = FakeSendRequest::respond(200, r#"["back", "chest"]"#);
        let catalog = ExerciseDb::new(&transport, "https://exercisedb.test");

        assert_eq!(
            catalog.read_body_parts().await.unwrap(),
            vec![String::from("back"), String::from("chest")]
        );
        assert_eq!(
            *transport.requests.lock().unwrap(),
            vec![String::from("https://exercisedb.test/exercises/bodyPartList")]
        );
    }

    #[tokio::test]
    async fn test_not_found() {
        let transport = FakeSendRequest::respond(404, "");
        let catalog = ExerciseDb::new(&transport, "https://exercisedb.test");
        assert!(matches!(
            catalog.read_exercise(&"9999".into()).await,
            Err(ReadError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_server_error() {
        let transport = FakeSendRequest::respond(500, "");
        let catalog = ExerciseDb::new(&transport, "https://exercisedb.test");
        assert!(matches!(
            catalog.read_exercises().await,
            Err(ReadError::Storage(StorageError::Other(_)))
        ));
    }

    #[tokio::test]
    async fn test_no_connection() {
        let transport = FakeSendRequest::unreachable();
        let catalog = ExerciseDb::new(&transport, "https://exercisedb.test");
        assert!(matches!(
            catalog.read_exercises().await,
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let transport = FakeSendRequest::respond(200, "not json");
        let catalog = ExerciseDb::new(&transport, "https://exercisedb.test");
        assert!(matches!(
            catalog.read_exercises().await,
            Err(ReadError::Other(_))
        ));
    }
}
