use log::debug;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AutoPlayVideoProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Muted, looping background video. Some mobile browsers ignore the
/// autoplay attribute, so playback is also requested on mount.
#[function_component(AutoPlayVideo)]
pub fn auto_play_video(props: &AutoPlayVideoProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    // The attribute alone does not mute elements created from script
                    video.set_muted(true);
                    match video.play() {
                        Ok(promise) => spawn_local(async move {
                            if JsFuture::from(promise).await.is_err() {
                                debug!("Autoplay was blocked by the browser");
                            }
                        }),
                        Err(_) => debug!("Video element refused play()"),
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <video
            ref={video_ref}
            class={props.class.clone()}
            src={props.src.clone()}
            muted={true}
            autoplay={true}
            loop={true}
            playsinline={true}
        />
    }
}
