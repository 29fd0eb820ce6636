use super::emoji_sticker::EmojiSticker;
use crate::config::StickerConfig;
use crate::model::StickerSource;
use crate::util::clog;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(StickerConfig::load);

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            clog(
                config.debug_log,
                &format!(
                    "sticker app mounted: size={} source={}",
                    config.sticker_size, config.sticker_source
                ),
            );
            || ()
        });
    }

    let background_style = format!(
        "position:relative; width:100vw; height:100vh; overflow:hidden; display:flex; flex-direction:column; align-items:center; justify-content:flex-end; background:#25292e url('{}') center / contain no-repeat;",
        config.background_source
    );

    html! {
        <ContextProvider<StickerConfig> context={(*config).clone()}>
            <div id="sticker-stage" style={background_style}>
                <EmojiSticker
                    image_size={config.sticker_size}
                    sticker_source={StickerSource::from(config.sticker_source.clone())}
                />
            </div>
        </ContextProvider<StickerConfig>>
    }
}
