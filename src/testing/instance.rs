/// Build the full application against a freshly seeded store
///
/// Evaluates to `(service, store, dir)`. Keep `dir` alive for the duration of
/// the test; dropping it deletes the store file.
///
/// The expansion names `::tempfile` directly. This crate only has it as a
/// dev-dependency, so callers outside its own tests must depend on
/// `tempfile` themselves.
#[macro_export]
macro_rules! service {
    () => {{
        let dir = ::tempfile::tempdir().expect("Failed to create temp dir");
        let store = $crate::testing::setup::store(dir.path()).await;
        let app = ::actix_web::App::new()
            .wrap($crate::middlewares::RequestLog)
            .app_data(::actix_web::web::Data::new(store.clone()))
            .configure($crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, store, dir)
    }};
}
