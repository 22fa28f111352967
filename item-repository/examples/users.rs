use std::fs::File;

use item_repository::markup::{ITEM, ITEM_END, ITEM_START, REPOSITORY};
use item_repository::{Repository, RepositoryOptions, Store};
use itemdom::{Content, Element};
use serde_json::{Value, json};
use simplelog::{Config, LevelFilter, WriteLogger};

fn render_user(user: &Value) -> Element {
    Element::text(user["name"].as_str().unwrap_or("?")).class("user")
}

fn print_tree(el: &Element, depth: usize) {
    let label = match &el.content {
        Content::Text(text) => format!(" {text:?}"),
        _ => String::new(),
    };
    let classes = if el.classes.is_empty() {
        String::new()
    } else {
        format!(" .{}", el.classes.join("."))
    };
    println!("{}{}{}{}", "  ".repeat(depth), el.id, classes, label);
    for child in el.child_elements() {
        print_tree(child, depth + 1);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("users.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut root = Element::box_().id("root").child(
        Element::box_()
            .id("sidebar")
            .data(REPOSITORY, "users")
            .child(Element::text("Users").id("title"))
            .child(Element::box_().id("start").data(ITEM_START, ""))
            .child(
                Element::box_()
                    .id("seed")
                    .data(ITEM, json!({"id": 0, "name": "Root"}).to_string()),
            )
            .child(Element::box_().id("end").data(ITEM_END, ""))
            .child(Element::text("footer").id("footer")),
    );

    let store = Store::new();
    let options = RepositoryOptions::default().cache_components();
    let mut users = Repository::bind(&store, &mut root, "users", render_user, options)?;

    users
        .add(&mut root, json!({"id": 1, "name": "Ada"}))?
        .add_all(
            &mut root,
            [
                json!({"id": 2, "name": "Grace"}),
                json!({"id": 3, "name": "Linus"}),
            ],
        )?;
    users.select(&mut root, json!(2), true).remove(&mut root, json!(3));

    print_tree(&root, 0);
    println!("items: {}", serde_json::to_string(&users.get_all())?);

    if let Some(grace) = users.get_component(&root, &json!(2)) {
        println!("cached component for 2: {}", grace.id);
    }

    Ok(())
}
