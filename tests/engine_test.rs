use pretty_assertions::assert_eq;

use rust_folio::core::preference::{FileThemeStore, MemoryThemeStore, ThemeStore};
use rust_folio::core::state::{LoadStatus, CONTACT_SUCCESS, NEWSLETTER_SUCCESS};
use rust_folio::core::{Engine, StaticPostSource};
use rust_folio::theme::pages::blog::NO_POSTS;
use rust_folio::{Config, LoadError, Msg, Notice, PageId, Post, ThemeMode, UiEvent};

fn post(id: &str, title: &str, category: &str, featured: bool) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        author: "Ann Lee".to_string(),
        date: "2024-03-05T09:00:00.000Z".to_string(),
        category: category.to_string(),
        excerpt: format!("About {}", title),
        content: format!("<p>{} body</p>", title),
        image_url: None,
        featured,
    }
}

fn many_posts(n: usize) -> Vec<Post> {
    (1..=n)
        .map(|i| post(&i.to_string(), &format!("Entry {}", i), "Notes", false))
        .collect()
}

fn new_engine() -> Engine {
    Engine::new(Config::default(), Box::new(MemoryThemeStore::new()))
        .unwrap()
        .with_year(2026)
}

async fn ready_engine(posts: Vec<Post>) -> Engine {
    let mut engine = new_engine();
    engine.start(&StaticPostSource::Posts(posts)).await;
    engine
}

fn text_of(engine: &Engine, id: &str) -> String {
    engine
        .page()
        .content
        .find_by_id(id)
        .unwrap_or_else(|| panic!("missing #{}", id))
        .text_content()
}

fn card_titles(engine: &Engine) -> Vec<String> {
    engine
        .page()
        .content
        .find_all_by_class("post-card-title")
        .into_iter()
        .map(|e| e.text_content())
        .collect()
}

#[tokio::test]
async fn pending_load_keeps_content_blank() {
    let mut engine = new_engine();
    assert_eq!(engine.state().status(), LoadStatus::Pending);
    engine.dispatch(Msg::Navigate("#blog".to_string()));

    assert_eq!(engine.page().content.to_html(), "<div class=\"container\"></div>");
    // 导航栏和页脚照常渲染
    assert!(engine.chrome_view().footer.find_by_id("newsletter-form").is_some());
}

#[tokio::test]
async fn unknown_fragment_renders_home() {
    let mut engine = ready_engine(vec![post("1", "Intro", "Tech", true)]).await;
    engine.dispatch(Msg::Navigate("#nonsense".to_string()));

    assert_eq!(engine.page().route.page, PageId::Home);
    assert!(engine.page().content.find_by_id("home-page").is_some());
    assert_eq!(text_of(&engine, "hero-name"), "Your Name");
}

#[tokio::test]
async fn home_lists_at_most_three_featured_posts() {
    let posts = vec![
        post("1", "A", "Tech", true),
        post("2", "B", "Tech", false),
        post("3", "C", "Life", true),
        post("4", "D", "Life", true),
        post("5", "E", "Life", true),
    ];
    let engine = ready_engine(posts).await;
    assert_eq!(card_titles(&engine), vec!["A", "C", "D"]);
}

#[tokio::test]
async fn post_route_renders_post_details() {
    let mut engine = ready_engine(vec![post("1", "Intro", "Tech", true)]).await;
    engine.dispatch(Msg::Navigate("#post/1".to_string()));

    assert_eq!(engine.page().notice, None);
    assert_eq!(text_of(&engine, "post-title"), "Intro");
    assert_eq!(text_of(&engine, "post-author"), "By Ann Lee");
    assert_eq!(text_of(&engine, "post-date"), "March 5, 2024");
    assert_eq!(text_of(&engine, "post-category"), "Tech");
    let share = engine.page().content.find_by_id("social-share-buttons").unwrap();
    assert_eq!(share.children.len(), 3);
}

#[tokio::test]
async fn missing_post_renders_not_found() {
    let mut engine = ready_engine(vec![post("1", "Intro", "Tech", true)]).await;
    engine.dispatch(Msg::Navigate("#post/404".to_string()));

    assert_eq!(
        engine.page().notice,
        Some(Notice::PostNotFound { id: "404".to_string() })
    );
    assert_eq!(engine.page().content.text_content(), "Post not found.");
    assert!(engine.page().handlers.is_empty());
}

#[tokio::test]
async fn load_failure_is_terminal_for_every_route() {
    let mut engine = new_engine();
    engine
        .start(&StaticPostSource::Fail(LoadError::HttpStatus(503)))
        .await;
    assert_eq!(engine.state().status(), LoadStatus::Failed);

    for fragment in ["#home", "#blog", "#post/1", "#contact"] {
        engine.dispatch(Msg::Navigate(fragment.to_string()));
        assert_eq!(engine.page().notice, Some(Notice::LoadFailed));
        assert!(engine
            .page()
            .content
            .text_content()
            .starts_with("Error loading blog posts."));
    }

    // 加载只发生一次
    engine.dispatch(Msg::PostsLoaded(many_posts(3)));
    assert_eq!(engine.state().status(), LoadStatus::Failed);
}

#[tokio::test]
async fn search_with_all_categories_example() {
    let posts = vec![
        post("1", "Intro", "Tech", true),
        post("2", "Travel", "Life", false),
    ];
    let mut engine = ready_engine(posts).await;
    engine.dispatch(Msg::Navigate("#blog".to_string()));
    assert_eq!(card_titles(&engine), vec!["Intro", "Travel"]);

    assert!(engine.handle_event(&UiEvent::change("category-filter", "all categories")));
    assert!(engine.handle_event(&UiEvent::input("search-input", "intro")));

    let ids: Vec<&str> = engine.state().filtered_posts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
    assert_eq!(card_titles(&engine), vec!["Intro"]);
}

#[tokio::test]
async fn category_options_include_sentinel_and_distinct_categories() {
    let posts = vec![
        post("1", "Intro", "Tech", false),
        post("2", "Travel", "Life", false),
        post("3", "Rust", "Tech", false),
    ];
    let mut engine = ready_engine(posts).await;
    engine.dispatch(Msg::Navigate("#blog".to_string()));
    engine.handle_event(&UiEvent::change("category-filter", "life"));

    let select = engine.page().content.find_by_id("category-filter").unwrap();
    let options: Vec<(String, bool)> = select
        .children
        .iter()
        .filter_map(|n| n.as_element())
        .map(|o| (o.get_attr("value").unwrap().to_string(), o.get_attr("selected").is_some()))
        .collect();
    assert_eq!(
        options,
        vec![
            ("all categories".to_string(), false),
            ("tech".to_string(), false),
            ("life".to_string(), true),
        ]
    );
    assert_eq!(card_titles(&engine), vec!["Travel"]);
}

#[tokio::test]
async fn empty_result_shows_no_posts_message() {
    let mut engine = ready_engine(many_posts(3)).await;
    engine.dispatch(Msg::Navigate("#blog".to_string()));
    engine.handle_event(&UiEvent::input("search-input", "zzz"));

    assert_eq!(text_of(&engine, "blog-posts-grid"), NO_POSTS);
    assert!(engine
        .page()
        .content
        .find_by_id("pagination-controls")
        .unwrap()
        .children
        .is_empty());
}

#[tokio::test]
async fn single_page_suppresses_pagination() {
    let mut engine = ready_engine(many_posts(6)).await;
    engine.dispatch(Msg::Navigate("#blog".to_string()));

    let controls = engine.page().content.find_by_id("pagination-controls").unwrap();
    assert!(controls.children.is_empty());
    assert_eq!(card_titles(&engine).len(), 6);
}

#[tokio::test]
async fn pagination_buttons_switch_pages() {
    let mut engine = ready_engine(many_posts(13)).await;
    engine.dispatch(Msg::Navigate("#blog".to_string()));

    let controls = engine.page().content.find_by_id("pagination-controls").unwrap();
    assert_eq!(controls.children.len(), 3);
    assert!(engine.page().content.find_by_id("page-button-1").unwrap().has_class("active"));

    assert!(engine.handle_event(&UiEvent::click("page-button-3")));
    assert_eq!(engine.state().current_page(), 3);
    assert_eq!(card_titles(&engine), vec!["Entry 13"]);
    assert!(engine.page().content.find_by_id("page-button-3").unwrap().has_class("active"));

    // 不存在的按钮不会被处理
    assert!(!engine.handle_event(&UiEvent::click("page-button-4")));
    assert_eq!(engine.state().current_page(), 3);
}

#[tokio::test]
async fn filter_change_resets_to_first_page() {
    let mut engine = ready_engine(many_posts(13)).await;
    engine.dispatch(Msg::Navigate("#blog".to_string()));
    engine.handle_event(&UiEvent::click("page-button-2"));
    assert_eq!(engine.state().current_page(), 2);

    engine.handle_event(&UiEvent::input("search-input", "entry"));
    assert_eq!(engine.state().current_page(), 1);

    engine.handle_event(&UiEvent::click("page-button-2"));
    engine.handle_event(&UiEvent::change("category-filter", "notes"));
    assert_eq!(engine.state().current_page(), 1);
}

#[tokio::test]
async fn entering_blog_starts_with_a_fresh_filter() {
    let mut engine = ready_engine(many_posts(8)).await;
    engine.dispatch(Msg::Navigate("#blog".to_string()));
    engine.handle_event(&UiEvent::input("search-input", "Entry 1"));
    assert_eq!(engine.state().filtered_len(), 1);

    engine.dispatch(Msg::Navigate("#about".to_string()));
    engine.dispatch(Msg::Navigate("#blog".to_string()));
    assert_eq!(engine.state().filtered_len(), 8);
    let search = engine.page().content.find_by_id("search-input").unwrap();
    assert_eq!(search.get_attr("value"), Some(""));
}

#[tokio::test]
async fn card_link_navigates_to_post() {
    let mut engine = ready_engine(vec![post("7", "Seven", "Tech", true)]).await;
    assert!(engine.handle_event(&UiEvent::click("post-link-7")));
    assert_eq!(engine.page().route.page, PageId::Post);
    assert_eq!(text_of(&engine, "post-title"), "Seven");
    assert!(engine.scroll_to_top());
}

#[tokio::test]
async fn active_nav_link_follows_route() {
    let mut engine = ready_engine(many_posts(1)).await;
    let active = |engine: &Engine| -> Vec<String> {
        engine
            .chrome_view()
            .nav
            .find_all_by_class("active")
            .into_iter()
            .filter_map(|e| e.get_attr("href").map(str::to_string))
            .collect()
    };
    assert_eq!(active(&engine), vec!["#home"]);

    assert!(engine.handle_event(&UiEvent::click("nav-about")));
    assert_eq!(active(&engine), vec!["#about"]);

    engine.dispatch(Msg::Navigate("#post/1".to_string()));
    assert!(active(&engine).is_empty());

    engine.dispatch(Msg::Navigate("#nonsense".to_string()));
    assert!(engine.page().content.find_by_id("home-page").is_some());
    assert!(active(&engine).is_empty());

    engine.dispatch(Msg::Navigate("#".to_string()));
    assert_eq!(active(&engine), vec!["#home"]);
}

#[tokio::test]
async fn contact_submission_acknowledges_and_clears() {
    let mut engine = ready_engine(many_posts(1)).await;
    engine.dispatch(Msg::Navigate("#contact".to_string()));
    engine.handle_event(&UiEvent::input("contact-name", "Ann"));
    engine.handle_event(&UiEvent::input("contact-message", "Hi there"));
    assert_eq!(
        engine.page().content.find_by_id("contact-name").unwrap().get_attr("value"),
        Some("Ann")
    );

    assert!(engine.handle_event(&UiEvent::submit("contact-form")));
    assert_eq!(text_of(&engine, "contact-feedback"), CONTACT_SUCCESS);
    assert_eq!(
        engine.page().content.find_by_id("contact-name").unwrap().get_attr("value"),
        Some("")
    );
    assert_eq!(text_of(&engine, "contact-message"), "");

    engine.dispatch(Msg::Navigate("#home".to_string()));
    engine.dispatch(Msg::Navigate("#contact".to_string()));
    assert_eq!(text_of(&engine, "contact-feedback"), "");
}

#[tokio::test]
async fn newsletter_submission_acknowledges_and_clears() {
    let mut engine = ready_engine(many_posts(1)).await;
    engine.handle_event(&UiEvent::input("newsletter-email", "a@b.dev"));
    assert!(engine.handle_event(&UiEvent::submit("newsletter-form")));

    let footer = &engine.chrome_view().footer;
    assert_eq!(footer.find_by_id("newsletter-feedback").unwrap().text_content(), NEWSLETTER_SUCCESS);
    assert_eq!(footer.find_by_id("newsletter-email").unwrap().get_attr("value"), Some(""));
    assert_eq!(footer.find_by_id("current-year").unwrap().text_content(), "2026");
}

#[tokio::test]
async fn footer_skips_empty_social_links() {
    let mut config = Config::default();
    config.social.github = Some("https://github.com/ann".to_string());
    config.social.twitter = Some(String::new());
    let engine = Engine::new(config, Box::new(MemoryThemeStore::new())).unwrap();

    let links = engine.chrome_view().footer.find_by_id("footer-social-links").unwrap();
    assert_eq!(links.children.len(), 1);
    let link = links.children[0].as_element().unwrap();
    assert_eq!(link.get_attr("aria-label"), Some("github"));
}

#[tokio::test]
async fn mobile_menu_toggles_and_closes_on_navigation() {
    let mut engine = ready_engine(many_posts(1)).await;
    assert!(engine.handle_event(&UiEvent::click("mobile-nav-toggle")));
    assert!(engine.chrome().nav_open);
    assert!(engine.chrome_view().nav.find_by_id("nav-links").unwrap().has_class("active"));

    engine.handle_event(&UiEvent::click("nav-blog"));
    assert!(!engine.chrome().nav_open);
}

#[tokio::test]
async fn theme_toggle_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");

    let mut engine = Engine::new(Config::default(), Box::new(FileThemeStore::new(&path))).unwrap();
    assert_eq!(engine.theme(), ThemeMode::Light);
    assert!(engine.handle_event(&UiEvent::click("theme-toggle")));
    assert_eq!(engine.theme(), ThemeMode::Dark);
    drop(engine);

    let reloaded = Engine::new(Config::default(), Box::new(FileThemeStore::new(&path))).unwrap();
    assert_eq!(reloaded.theme(), ThemeMode::Dark);
    assert!(reloaded.document().unwrap().contains("class=\"dark-mode\""));
    let toggle = reloaded.chrome_view().nav.find_by_id("theme-toggle").unwrap();
    assert_eq!(toggle.get_attr("checked"), Some("checked"));
}

#[tokio::test]
async fn theme_toggle_with_shared_memory_store() {
    let store = MemoryThemeStore::new();
    let mut engine = Engine::new(Config::default(), Box::new(store.clone())).unwrap();
    engine.dispatch(Msg::ThemeToggled);
    engine.dispatch(Msg::ThemeToggled);
    assert_eq!(store.load(), ThemeMode::Light);
    assert_eq!(store.raw().as_deref(), Some("light"));
}

#[tokio::test]
async fn document_contains_chrome_and_content() {
    let mut engine = ready_engine(vec![post("1", "Intro", "Tech", true)]).await;
    engine.dispatch(Msg::Navigate("#about".to_string()));
    let html = engine.document().unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<main id=\"main-content\">"));
    assert!(html.contains("id=\"about-page\""));
    assert!(html.contains("id=\"newsletter-form\""));
    assert!(!html.contains("dark-mode"));
}
