use dioxus::prelude::*;
use quiz_core::model::LoginForm;

use crate::vm::QuizIntent;

#[component]
pub fn WelcomeView(on_intent: Callback<QuizIntent>) -> Element {
    let mut name = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut email = use_signal(String::new);

    let form = LoginForm::new(name(), mobile(), email());
    let can_submit = form.is_complete();

    rsx! {
        div { class: "page welcome",
            section { class: "hero",
                h1 { "CCC Quiz World" }
                p { class: "lead",
                    "Master the Course on Computer Concepts with our comprehensive quiz platform. "
                    "Practice with 250+ questions per chapter and track your progress!"
                }
                ul { class: "features",
                    li { "Multiple Chapters" }
                    li { "250+ Questions" }
                    li { "AI Explanations" }
                }
            }

            form { class: "card login",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let form = LoginForm::new(name(), mobile(), email());
                    if form.is_complete() {
                        on_intent.call(QuizIntent::Login(form));
                    }
                },
                p { class: "muted", "Enter your details to begin your CCC preparation journey" }
                label { r#for: "name", "Full Name *" }
                input {
                    id: "name",
                    r#type: "text",
                    placeholder: "Enter your full name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                label { r#for: "mobile", "Mobile Number *" }
                input {
                    id: "mobile",
                    r#type: "tel",
                    placeholder: "Enter your mobile number",
                    value: "{mobile}",
                    oninput: move |evt| mobile.set(evt.value()),
                }
                label { r#for: "email", "Email ID *" }
                input {
                    id: "email",
                    r#type: "email",
                    placeholder: "Enter your email address",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                button { class: "btn hero", r#type: "submit", disabled: !can_submit,
                    "Start Learning"
                }
            }
        }
    }
}
