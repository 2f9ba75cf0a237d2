mod common;

use jobtracker::backend::mock::{DEMO_EMAIL, DEMO_PASSWORD, MOCK_TOKEN};
use jobtracker::models::{JobFields, JobStatus};
use jobtracker::session::TokenStorage;

use common::{http_context, spawn_mock_api};

#[tokio::test]
async fn test_login_persists_token_and_verify_restores_session() {
    let base_url = spawn_mock_api().await;
    let dir = tempfile::tempdir().unwrap();

    let (ctx, tokens) = http_context(&base_url, dir.path());
    let user = ctx.auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
    assert_eq!(user.name, "Demo User");
    assert_eq!(tokens.load().as_deref(), Some(MOCK_TOKEN));

    // A second process picking up the same token file.
    let (restored, _) = http_context(&base_url, dir.path());
    let user = restored.bootstrap().await.expect("session restored from file");
    assert_eq!(user.email, DEMO_EMAIL);
    assert!(restored.auth.is_authenticated());
}

#[tokio::test]
async fn test_invalid_credentials_message_reaches_caller() {
    let base_url = spawn_mock_api().await;
    let dir = tempfile::tempdir().unwrap();
    let (ctx, tokens) = http_context(&base_url, dir.path());

    let err = ctx.auth.login("demo@example.com", "letmein").await.unwrap_err();
    assert_eq!(err, "Invalid credentials");
    assert!(tokens.load().is_none());
}

#[tokio::test]
async fn test_rejected_stored_token_is_cleared() {
    let base_url = spawn_mock_api().await;
    let dir = tempfile::tempdir().unwrap();
    let (ctx, tokens) = http_context(&base_url, dir.path());
    tokens.save("stale-token").unwrap();

    assert!(ctx.bootstrap().await.is_none());
    assert!(tokens.load().is_none());
}

#[tokio::test]
async fn test_unreachable_backend_keeps_stored_token() {
    let base_url = spawn_mock_api().await;
    let dir = tempfile::tempdir().unwrap();
    let (ctx, _) = http_context(&base_url, dir.path());
    ctx.auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

    // Next run starts while the server is down.
    let (offline, tokens) = http_context("http://127.0.0.1:9/api", dir.path());
    assert!(offline.bootstrap().await.is_none());
    assert!(!offline.auth.is_authenticated());
    assert_eq!(tokens.load().as_deref(), Some(MOCK_TOKEN));

    // Once the server is back, the same token still works.
    let (restored, _) = http_context(&base_url, dir.path());
    assert!(restored.bootstrap().await.is_some());
}

#[tokio::test]
async fn test_job_crud_over_http() {
    let base_url = spawn_mock_api().await;
    let dir = tempfile::tempdir().unwrap();
    let (ctx, _) = http_context(&base_url, dir.path());
    ctx.auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

    ctx.jobs.fetch_all().await;
    assert_eq!(ctx.jobs.jobs().len(), 2);

    let created = ctx
        .jobs
        .create(
            JobFields::new("Acme", "Backend Engineer")
                .with_job_url("https://acme.example/jobs/9"),
        )
        .await
        .unwrap();
    assert_eq!(created.status, JobStatus::Applied);

    let updated = ctx
        .jobs
        .update(&created.id, JobFields::default().with_status(JobStatus::Offer))
        .await
        .unwrap();
    assert_eq!(updated.status, JobStatus::Offer);
    assert_eq!(updated.company, "Acme");

    let err = ctx
        .jobs
        .update("no-such-id", JobFields::default().with_status(JobStatus::Offer))
        .await
        .unwrap_err();
    assert_eq!(err, "Job not found");

    ctx.jobs.delete(&created.id).await.unwrap();
    ctx.jobs.delete(&created.id).await.unwrap();

    ctx.jobs.fetch_all().await;
    let jobs = ctx.jobs.jobs();
    assert!(jobs.iter().all(|job| job.id != created.id));

    let stats = ctx.jobs.stats();
    assert_eq!(stats.total, jobs.len());
    assert_eq!(stats.counts_by_status.values().sum::<usize>(), stats.total);
}

#[tokio::test]
async fn test_server_side_validation_message_reaches_caller() {
    let base_url = spawn_mock_api().await;
    let dir = tempfile::tempdir().unwrap();
    let (ctx, _) = http_context(&base_url, dir.path());

    let err = ctx.jobs.create(JobFields::new("Acme", "")).await.unwrap_err();
    assert_eq!(err, "Job title is required");
}

#[tokio::test]
async fn test_generation_endpoints_over_http() {
    let base_url = spawn_mock_api().await;
    let dir = tempfile::tempdir().unwrap();
    let (ctx, _) = http_context(&base_url, dir.path());

    let plan = ctx
        .assistant
        .prep_plan("Backend Engineer", "Acme")
        .await
        .unwrap();
    assert!(plan.contains("Backend Engineer"));
    assert!(plan.contains("Acme"));

    let bullets = ctx
        .assistant
        .resume_bullets("Backend Engineer", "4 years building APIs")
        .await
        .unwrap();
    assert_eq!(bullets.len(), 3);
}

#[tokio::test]
async fn test_unreachable_backend_keeps_list_and_reports_failure() {
    // Nothing listens on port 9 of localhost.
    let dir = tempfile::tempdir().unwrap();
    let (ctx, _) = http_context("http://127.0.0.1:9/api", dir.path());

    ctx.jobs.fetch_all().await;
    assert!(ctx.jobs.jobs().is_empty());
    assert!(ctx.jobs.try_fetch_all().await.is_err());

    let err = ctx.jobs.create(JobFields::new("Acme", "SRE")).await.unwrap_err();
    assert_eq!(err, "Failed to add job");
}
