//! Planet service: use-cases for managing planets.

use holocron_domain::error::{HolocronError, NotFoundError};
use holocron_domain::id::PlanetId;
use holocron_domain::planet::{NewPlanet, Planet};

use crate::ports::PlanetRepository;

/// Application service for planet CRUD operations.
pub struct PlanetService<R> {
    repo: R,
}

impl<R: PlanetRepository> PlanetService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new planet after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] if invariants fail,
    /// [`HolocronError::Conflict`] when the name is taken, or a storage
    /// error propagated from the repository.
    #[tracing::instrument(skip(self, planet), fields(planet_name = %planet.name))]
    pub async fn create_planet(&self, planet: NewPlanet) -> Result<Planet, HolocronError> {
        planet.validate()?;
        self.repo.create(planet).await
    }

    /// Look up a planet by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no planet with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_planet(&self, id: PlanetId) -> Result<Planet, HolocronError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all planets.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_planets(&self) -> Result<Vec<Planet>, HolocronError> {
        self.repo.get_all().await
    }

    /// Delete a planet by id.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no planet with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_planet(&self, id: PlanetId) -> Result<(), HolocronError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: PlanetId) -> HolocronError {
    NotFoundError {
        entity: "Planet",
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_domain::error::ValidationError;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPlanetRepo {
        store: Mutex<BTreeMap<PlanetId, Planet>>,
    }

    impl PlanetRepository for InMemoryPlanetRepo {
        fn create(
            &self,
            planet: NewPlanet,
        ) -> impl Future<Output = Result<Planet, HolocronError>> + Send {
            let mut store = self.store.lock().unwrap();
            let id = PlanetId::new(i64::try_from(store.len()).unwrap() + 1);
            let planet = planet.into_planet(id);
            store.insert(id, planet.clone());
            async { Ok(planet) }
        }

        fn get_by_id(
            &self,
            id: PlanetId,
        ) -> impl Future<Output = Result<Option<Planet>, HolocronError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Planet>, HolocronError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Planet> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: PlanetId,
        ) -> impl Future<Output = Result<bool, HolocronError>> + Send {
            let mut store = self.store.lock().unwrap();
            let removed = store.remove(&id).is_some();
            async move { Ok(removed) }
        }
    }

    fn make_service() -> PlanetService<InMemoryPlanetRepo> {
        PlanetService::new(InMemoryPlanetRepo::default())
    }

    fn tatooine() -> NewPlanet {
        NewPlanet::builder()
            .name("Tatooine")
            .climate("arid")
            .diameter("10465")
            .gravity("1")
            .population("200000")
            .terrain("desert")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_planet_and_echo_fields() {
        let svc = make_service();
        let created = svc.create_planet(tatooine()).await.unwrap();

        assert_eq!(created.name, "Tatooine");
        assert_eq!(created.population, "200000");
        assert_eq!(svc.get_planet(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_reject_create_when_climate_is_blank() {
        let svc = make_service();
        let mut planet = tatooine();
        planet.climate = "  ".to_string();

        let result = svc.create_planet(planet).await;
        assert!(matches!(
            result,
            Err(HolocronError::Validation(ValidationError::EmptyField(
                "climate"
            )))
        ));
    }

    #[tokio::test]
    async fn should_list_all_planets() {
        let svc = make_service();
        svc.create_planet(tatooine()).await.unwrap();
        let mut hoth = tatooine();
        hoth.name = "Hoth".to_string();
        svc.create_planet(hoth).await.unwrap();

        assert_eq!(svc.list_planets().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_after_delete() {
        let svc = make_service();
        let created = svc.create_planet(tatooine()).await.unwrap();

        svc.delete_planet(created.id).await.unwrap();

        let result = svc.get_planet(created.id).await;
        assert!(matches!(result, Err(HolocronError::NotFound(_))));
        let result = svc.delete_planet(created.id).await;
        assert!(matches!(result, Err(HolocronError::NotFound(_))));
    }
}
