#[cfg(test)]
mod tests {
    use crate::database::entity::listing;
    use crate::database::postgres_repo::PostgresListingRepository;
    use campus_core::domain::Listing;
    use campus_core::ports::BaseRepository;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_listing_by_id() {
        let listing_id = uuid::Uuid::new_v4();
        let owner_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![listing::Model {
                id: listing_id,
                name: "Oscilloscope".to_owned(),
                description: "Dual channel, works fine".to_owned(),
                category: listing::Category::Equipment,
                offer_type: listing::OfferType::ForLoan,
                price: None,
                contact: "lab@example.com".to_owned(),
                owner_id,
                owner_name: "Mehmet".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresListingRepository::new(db);

        let result: Option<Listing> = repo.find_by_id(listing_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.name, "Oscilloscope");
        assert_eq!(found.id, listing_id);
        assert_eq!(found.price, None);
        assert_eq!(found.category, campus_core::domain::Category::Equipment);
    }
}
