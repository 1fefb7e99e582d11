use std::rc::Rc;

use shared::{Author, ChatMessage, Transcript};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};

#[derive(Clone, PartialEq, Default, Debug)]
pub struct ChatState {
    pub is_open: bool,
    pub transcript: Transcript,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ChatAction {
    SetOpen(bool),
    SetDraft(String),
    Send,
    AnswerPending,
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();

        match action {
            ChatAction::SetOpen(is_open) => {
                state.is_open = is_open;
            }
            ChatAction::SetDraft(draft) => {
                state.transcript.set_draft(draft);
            }
            ChatAction::Send => {
                if !state.transcript.send() {
                    return self;
                }
                log::debug!(
                    "Chat message sent, pending_replies={}",
                    state.transcript.pending_replies()
                );
            }
            ChatAction::AnswerPending => {
                if state.transcript.answer_pending() == 0 {
                    return self;
                }
            }
        }

        Rc::new(state)
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub reply_delay_ms: u32,
}

fn render_message(message: &ChatMessage) -> Html {
    let (author, row, bubble) = match message.author {
        Author::User => ("user", "justify-content-end", "text-bg-primary"),
        Author::Bot => ("bot", "justify-content-start", "text-bg-dark"),
    };
    html! {
        <div class={classes!("d-flex", "mb-2", row)}>
            <div class={classes!("p-2", "rounded", bubble)} style="max-width: 75%;" data-author={author}>{&message.text}</div>
        </div>
    }
}

/// Floating assistant with a canned answer. The reply timer is owned by
/// `use_timeout`, re-armed on every send and dropped when the chatbot unmounts.
#[function_component(Chatbot)]
pub fn chatbot(props: &Props) -> Html {
    let state = use_reducer(ChatState::default);

    let reply_timer = {
        let state = state.clone();
        use_timeout(
            move || state.dispatch(ChatAction::AnswerPending),
            props.reply_delay_ms,
        )
    };

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ChatAction::SetOpen(!state.is_open)))
    };

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ChatAction::SetOpen(false)))
    };

    let on_draft_change = {
        let state = state.clone();
        Callback::from(move |draft: String| state.dispatch(ChatAction::SetDraft(draft)))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if state.transcript.draft().trim().is_empty() {
                return;
            }
            state.dispatch(ChatAction::Send);
            reply_timer.reset();
        })
    };

    let messages = state.transcript.messages().iter().map(render_message);

    html! {
        <div class="position-fixed bottom-0 end-0 m-3" style="z-index: 1050;">
            if state.is_open {
                <div class="card shadow mb-3" style="width: 20rem;">
                    <div class="card-header text-bg-primary d-flex justify-content-between align-items-center">
                        <span class="fw-semibold">{"JobConnect Assistant"}</span>
                        <button type="button" class="btn-close btn-close-white" aria-label="Close" onclick={on_close}></button>
                    </div>
                    <div class="card-body overflow-auto" style="height: 20rem;">
                        { for messages }
                    </div>
                    <form class="card-footer d-flex gap-2" onsubmit={on_submit}>
                        <InputText
                            id="chat-draft"
                            name="chat-draft"
                            value={state.transcript.draft().to_owned()}
                            placeholder="Type a message..."
                            input_type={InputType::Text}
                            class={classes!("form-control", "rounded-pill")}
                            on_change={on_draft_change} />
                        <button type="submit" class="btn btn-primary rounded-circle" aria-label="Send">{"➤"}</button>
                    </form>
                </div>
            }
            <div class="d-flex justify-content-end">
                <button
                    class="btn btn-primary rounded-circle shadow"
                    style="width: 3rem; height: 3rem;"
                    aria-label="Toggle assistant"
                    onclick={on_toggle}>
                    {"💬"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: Rc<ChatState>, action: ChatAction) -> Rc<ChatState> {
        state.reduce(action)
    }

    #[test]
    fn send_then_answer_produces_one_reply() {
        let state = Rc::new(ChatState::default());
        let state = reduce(state, ChatAction::SetDraft("Hello".to_owned()));
        let state = reduce(state, ChatAction::Send);
        assert_eq!(state.transcript.pending_replies(), 1);

        let state = reduce(state, ChatAction::AnswerPending);
        assert_eq!(state.transcript.messages().len(), 2);
        assert_eq!(state.transcript.messages()[1].author, Author::Bot);
    }

    #[test]
    fn idle_timer_leaves_state_untouched() {
        let state = Rc::new(ChatState::default());
        let after = reduce(state.clone(), ChatAction::AnswerPending);
        assert!(Rc::ptr_eq(&state, &after));
    }
}
