//! Parse messaging updates whose sender arrives either as a chat or as a
//! user, and show how a rejected payload keeps its envelope data.
//!
//! Run with `cargo run --example message_update`.

use decant::{any_of, prelude::*};
use serde_json::{Value, json};

#[derive(Debug)]
#[allow(dead_code)]
struct Chat {
    id: i64,
    title: String,
}

#[derive(Debug)]
#[allow(dead_code)]
struct User {
    id: i64,
    first_name: String,
    last_name: Option<String>,
}

#[derive(Debug)]
enum Sender {
    Chat(Chat),
    User(User),
}

fn chat(input: &Value) -> Result<Chat, ParseError> {
    Ok(Chat {
        id: has_field("id", is_int()).parse(input)?,
        title: has_field("title", is_str()).parse(input)?,
    })
}

fn user(input: &Value) -> Result<User, ParseError> {
    Ok(User {
        id: has_field("id", is_int()).parse(input)?,
        first_name: has_field("first_name", is_str()).parse(input)?,
        last_name: has_optional_field("last_name", is_str()).parse(input)?,
    })
}

fn main() {
    let sender = any_of![
        has_field("sender_chat", from_fn(chat)).map(Sender::Chat),
        has_field("from", from_fn(user)).map(Sender::User),
    ];

    let updates = json!([
        {
            "message_id": 100,
            "date": 1_676_769_964,
            "sender_chat": {"id": 666, "title": "Some Chat"},
        },
        {
            "message_id": 25_045,
            "date": 1_676_769_966,
            "from": {"id": 11_111, "first_name": 42},
            "text": "Hello there!",
        },
    ]);

    let Value::Array(updates) = &updates else {
        unreachable!("literal above is a sequence");
    };

    for update in updates {
        let message_id = has_field("message_id", is_int())
            .parse(update)
            .expect("every sample update carries a message_id");
        match sender.parse(update) {
            Ok(sender) => println!("update {message_id}: sent by {sender:?}"),
            Err(failure) => {
                println!("update {message_id}: rejected");
                println!("  human: {failure}");
                println!("  machine: {}", failure.error().to_value());
            }
        }
    }
}
