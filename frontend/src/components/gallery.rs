use log::info;
use yew::prelude::*;

const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "mov", "webm"];

pub fn is_video(file: &str) -> bool {
    file.rsplit_once('.')
        .map(|(_, ext)| VIDEO_EXTENSIONS.iter().any(|v| ext.eq_ignore_ascii_case(v)))
        .unwrap_or(false)
}

pub fn gallery_src(file: &str) -> String {
    format!("/gallery/{}", file)
}

#[derive(Properties, PartialEq)]
pub struct GalleryCardProps {
    pub file: AttrValue,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    pub index: usize,
}

#[function_component(GalleryCard)]
pub fn gallery_card(props: &GalleryCardProps) -> Html {
    let broken = use_state(|| false);

    if is_video(&props.file) {
        return html! {
            <div class="gallery-card gallery-video">
                <video src={gallery_src(&props.file)} controls={true} playsinline={true} preload="metadata" />
                if let Some(caption) = props.caption.clone() {
                    <div class="video-caption"><span>{caption}</span></div>
                }
            </div>
        };
    }

    // Missing images hide themselves and leave the placeholder showing
    let onerror = {
        let broken = broken.clone();
        let file = props.file.clone();
        Callback::from(move |_: Event| {
            info!("Gallery image {} failed to load, showing placeholder", file);
            broken.set(true);
        })
    };
    let alt = props
        .caption
        .clone()
        .unwrap_or_else(|| AttrValue::from(format!("Camp photo {}", props.index + 1)));

    html! {
        <div class="gallery-card">
            if !*broken {
                <img src={gallery_src(&props.file)} alt={alt} class="gallery-image" loading="lazy" onerror={onerror} />
            }
            <div class="gallery-placeholder">
                <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1" d="M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z" />
                </svg>
            </div>
            if let Some(caption) = props.caption.clone() {
                <div class="gallery-caption"><h3>{caption}</h3></div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_videos_by_extension() {
        assert!(is_video("summit.mp4"));
        assert!(is_video("rafting.MOV"));
        assert!(is_video("clips/night.webm"));
        assert!(!is_video("bocas.jpg"));
        assert!(!is_video("mp4"));
        assert!(!is_video("movie.mp4.png"));
    }

    #[test]
    fn sources_live_under_gallery() {
        assert_eq!(gallery_src("summit.jpg"), "/gallery/summit.jpg");
    }
}
