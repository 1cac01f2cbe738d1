use yew::prelude::*;

const FAQ: [(&str, &str); 4] = [
    (
        "How do I shorten a link?",
        "Paste the full URL on the home page and press Shorten. The short link appears below the form.",
    ),
    (
        "Do I need an account?",
        "No, but links created while logged in are listed on your profile where you can copy or delete them.",
    ),
    (
        "Can I sign in with Google?",
        "Yes. Open the login dialog and choose Continue with Google.",
    ),
    (
        "I forgot my password",
        "Use Forgot password? in the login dialog and we will email you a recovery link.",
    ),
];

#[function_component(HelpPage)]
pub fn help_page() -> Html {
    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{"Help"}</h1>
            {FAQ.iter().map(|(question, answer)| html! {
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                    <h2 class="font-semibold text-gray-900 dark:text-white">{*question}</h2>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{*answer}</p>
                </div>
            }).collect::<Html>()}
        </div>
    }
}
