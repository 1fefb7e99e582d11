use shared::{Author, Transcript, BOT_REPLY};

#[test]
fn test_each_message_gets_one_reply() {
    let mut transcript = Transcript::default();

    transcript.set_draft("Hi".to_owned());
    assert!(transcript.send());
    transcript.set_draft("Anyone there?".to_owned());
    assert!(transcript.send());
    assert_eq!(transcript.pending_replies(), 2);

    assert_eq!(transcript.answer_pending(), 2);
    assert_eq!(transcript.answer_pending(), 0);

    let authors: Vec<Author> = transcript
        .messages()
        .iter()
        .map(|message| message.author)
        .collect();
    assert_eq!(
        authors,
        vec![Author::User, Author::User, Author::Bot, Author::Bot]
    );
    assert!(transcript.messages()[2..]
        .iter()
        .all(|message| message.text == BOT_REPLY));
}

#[test]
fn test_answer_without_pending_is_noop() {
    let mut transcript = Transcript::default();
    assert_eq!(transcript.answer_pending(), 0);
    assert!(transcript.messages().is_empty());
}
