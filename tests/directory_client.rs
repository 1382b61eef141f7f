// tests/directory_client.rs
//! The REST client against a live server on a loopback port.

mod common;

use pretty_assertions::assert_eq;
use prompt_directory::app::CategoryFilter;
use prompt_directory::{
    Action, AppError, CategoryDraft, DirectoryClient, DirectoryState, PromptDraft, PromptType,
    TagList,
};

async fn serve() -> DirectoryClient {
    let ws = common::workspace();
    let app = common::build_test_app(&ws);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    DirectoryClient::new(&format!("http://{}", addr)).unwrap()
}

fn draft(title: &str, prompt_type: PromptType, category: &str, tags: &[&str]) -> PromptDraft {
    let mut tag_list = TagList::new();
    for tag in tags {
        tag_list.append(tag);
    }
    PromptDraft {
        category: category.to_string(),
        content: format!("{} body", title),
        tags: tag_list.into_vec(),
        ..PromptDraft::new(title, prompt_type)
    }
}

#[tokio::test]
async fn load_after_writes_feeds_the_state() {
    let client = serve().await;

    let category = client
        .create_category(&CategoryDraft {
            name: "Command Lines".to_string(),
            icon: "Terminal".to_string(),
            color: "#10B981".to_string(),
        })
        .await
        .unwrap();
    let first = client
        .create_prompt(&draft("List pods", PromptType::Command, "Command Lines", &["k8s", " k8s "]))
        .await
        .unwrap();
    let second = client
        .create_prompt(&draft("Summarize", PromptType::Prompt, "AI Prompts", &[]))
        .await
        .unwrap();
    assert_eq!(first.icon, "Terminal");
    assert_eq!(first.tags, vec!["k8s"]);

    let state = DirectoryState::default().apply(client.reload().await);
    assert!(!state.loading);
    assert_eq!(state.prompt_count(), 2);
    assert_eq!(state.categories.len(), 1);
    assert_eq!(state.categories[0], category);

    // Toggle a favorite the way a UI would: derive, send, then apply the reply.
    let toggled = state.toggled_favorite(&second.id).unwrap();
    let saved = client
        .update_prompt(&toggled.id, &toggled.to_draft())
        .await
        .unwrap();
    let state = state
        .apply(Action::PromptSaved(saved))
        .apply(Action::SelectCategory(CategoryFilter::Favorites));
    let visible: Vec<&str> = state.visible_prompts().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(visible, vec!["Summarize"]);

    client.delete_prompt(&first.id).await.unwrap();
    let (prompts, _) = client.load().await.unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].id, second.id);
}

#[tokio::test]
async fn server_errors_carry_status_and_message() {
    let client = serve().await;

    let err = client
        .update_prompt("not-an-id", &draft("x", PromptType::Prompt, "", &[]))
        .await
        .unwrap_err();
    match err {
        AppError::RemoteRequest { status, message, .. } => {
            assert_eq!(status, 400);
            assert!(message.starts_with("Failed to update prompt: "));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let err = client
        .delete_category("44444444-4444-4444-4444-444444444444")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::RemoteRequest { status: 500, .. }));
}

#[tokio::test]
async fn unreachable_server_becomes_a_load_failure() {
    let client = DirectoryClient::new("http://127.0.0.1:9").unwrap();
    let state = DirectoryState::default().apply(client.reload().await);
    assert!(!state.loading);
    assert!(state.error.is_some());
}
