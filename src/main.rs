use yew_emoji_sticker::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
