use yew::prelude::*;
use chrono::{Datelike, Local};

use crate::components::anchor::AnchorLink;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p>{format!("© {} Omnæs Dæmones", year)}</p>
                <AnchorLink target="site-header" class="back-to-top">
                    {"Back to top"}
                </AnchorLink>
            </div>
        </footer>
    }
}
