//! Person service: use-cases for managing people.

use holocron_domain::error::{HolocronError, NotFoundError};
use holocron_domain::id::PersonId;
use holocron_domain::people::{NewPerson, Person};

use crate::ports::PersonRepository;

/// Application service for people CRUD operations.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new person after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, person), fields(person_name = %person.name))]
    pub async fn create_person(&self, person: NewPerson) -> Result<Person, HolocronError> {
        person.validate()?;
        self.repo.create(person).await
    }

    /// Look up a person by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_person(&self, id: PersonId) -> Result<Person, HolocronError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all people.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_people(&self) -> Result<Vec<Person>, HolocronError> {
        self.repo.get_all().await
    }

    /// Delete a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_person(&self, id: PersonId) -> Result<(), HolocronError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: PersonId) -> HolocronError {
    NotFoundError {
        entity: "People",
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPersonRepo {
        store: Mutex<BTreeMap<PersonId, Person>>,
    }

    impl PersonRepository for InMemoryPersonRepo {
        fn create(
            &self,
            person: NewPerson,
        ) -> impl Future<Output = Result<Person, HolocronError>> + Send {
            let mut store = self.store.lock().unwrap();
            let id = PersonId::new(i64::try_from(store.len()).unwrap() + 1);
            let person = person.into_person(id);
            store.insert(id, person.clone());
            async { Ok(person) }
        }

        fn get_by_id(
            &self,
            id: PersonId,
        ) -> impl Future<Output = Result<Option<Person>, HolocronError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, HolocronError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Person> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: PersonId,
        ) -> impl Future<Output = Result<bool, HolocronError>> + Send {
            let mut store = self.store.lock().unwrap();
            let removed = store.remove(&id).is_some();
            async move { Ok(removed) }
        }
    }

    fn make_service() -> PersonService<InMemoryPersonRepo> {
        PersonService::new(InMemoryPersonRepo::default())
    }

    fn chewie() -> NewPerson {
        NewPerson::builder()
            .name("Chewbacca")
            .gender("male")
            .eye_color("blue")
            .skin_color("unknown")
            .hair_color("brown")
            .birth_year("200BBY")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_person_and_fetch_it_back() {
        let svc = make_service();
        let created = svc.create_person(chewie()).await.unwrap();

        assert_eq!(created.hair_color, "brown");
        assert_eq!(svc.get_person(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_list_people() {
        let svc = make_service();
        svc.create_person(chewie()).await.unwrap();
        assert_eq!(svc.list_people().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_person_missing() {
        let svc = make_service();
        assert!(matches!(
            svc.get_person(PersonId::new(5)).await,
            Err(HolocronError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_person(PersonId::new(5)).await,
            Err(HolocronError::NotFound(_))
        ));
    }
}
