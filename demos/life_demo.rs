//! Life Demo: The full pipeline against a canned stream.
//!
//! Draws a seeded pixel portrait for a sample configuration, then
//! replays a scripted streaming response through the decoder and the
//! typewriter, revealing the story in the terminal at reading pace.
//!
//! Run with `RUST_LOG=debug` to watch the pipeline diagnostics.

use lifeloom::{
    portray, render_raster, stream_to_typewriter, ChatMessage, CompletionRequest, ModelConfig,
    ScriptedStream, SelectionFingerprint, TerminalSink, TypewriterActor, TypewriterConfig,
};
use serde_json::json;
use std::time::Duration;

/// Canned story standing in for the model's output.
const STORY: &str = "I was born in 1984 in a small coastal town, the year the harbor \
got its first container crane. My mother sorted fish at the cannery; my father fixed \
diesel engines for the fleet. I finished vocational school in 2001 and took the ferry \
to the provincial capital, where I spent a decade wiring apartment blocks before the \
building boom cooled. When it did, I followed a cousin into appliance repair and, \
later, into a small shop of my own. It never made us rich. It kept the lights on, \
put my daughter through school, and gave me a bench by the window where I still \
work most mornings.";

/// Frame the story as a line-framed streaming response, one word per delta.
fn sse_script(story: &str) -> String {
    let mut body = String::new();
    for piece in story.split_inclusive(' ') {
        let line = json!({"choices": [{"delta": {"content": piece}}]});
        body.push_str("data: ");
        body.push_str(&line.to_string());
        body.push('\n');
    }
    body.push_str("data: {\"choices\":[{\"delta\":{},\"finish_reason\":\"stop\"}]}\n");
    body.push_str("data: [DONE]\n");
    body
}

fn main() {
    env_logger::init();

    let config = ModelConfig {
        base_url: "https://api.example.test/v1/chat/completions".to_owned(),
        api_key: "offline".to_owned(),
        model: "story-1".to_owned(),
        temperature: 0.9,
        max_tokens: 900,
    };

    let fingerprint = SelectionFingerprint::new([
        "female",
        "1978-1988",
        "1984",
        "coastal town",
        "adaptive",
    ]);

    println!("Lifeloom Demo");
    println!("=============\n");
    print!("{}", render_raster(&portray(&fingerprint)));
    println!();

    let request = CompletionRequest::streaming(
        &config,
        vec![
            ChatMessage::system("You are a life-history generator."),
            ChatMessage::user("Generate a plausible life for this configuration."),
        ],
    );

    // Small blocks so line boundaries land everywhere, like a real wire.
    let mut transport = ScriptedStream::chunked(&sse_script(STORY), 17);

    let typewriter = TypewriterActor::spawn(
        TerminalSink::stdout(72),
        TypewriterConfig {
            min_delay: Duration::from_millis(26),
            max_delay: Duration::from_millis(42),
            ..TypewriterConfig::default()
        },
    );

    match stream_to_typewriter(&mut transport, &config, &request, &typewriter) {
        Ok(completion) => {
            println!(
                "\n\n[done, finish_reason: {}]",
                completion.finish_reason.as_deref().unwrap_or("-")
            );
        }
        Err(err) => {
            println!("\n\ngeneration failed: {err}");
        }
    }
    typewriter.join();
}
