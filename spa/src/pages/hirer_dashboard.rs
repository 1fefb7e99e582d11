use shared::{seed, Candidate, ContactCard, ListingQuery, SortCriterion};
use yew::prelude::*;

use crate::{
    app::AppState,
    components::composite::{
        candidate_list::CandidateList, contact_modal::ContactModal, search_bar::SearchBar,
        sort_toggles::SortToggles,
    },
    seed::use_seed,
};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub app: AppState,
}

#[function_component(HirerDashboard)]
pub fn hirer_dashboard(props: &Props) -> Html {
    let source = use_seed(seed::candidates, props.app.on_fault.clone());
    let query = use_state(ListingQuery::default);
    let contact = use_state(|| None::<ContactCard>);

    let listing = use_memo(((*query).clone(), source), |(query, source)| {
        let view = query.apply(source);
        log::debug!(
            "Listing recomputed, text={text}, sort={sort:?}, count={count}",
            text = query.text,
            sort = query.criteria.effective(),
            count = view.len()
        );
        view
    });

    let on_search = {
        let query = query.clone();
        Callback::from(move |text: String| {
            let mut data = (*query).clone();
            data.text = text;
            query.set(data);
        })
    };

    let on_toggle = {
        let query = query.clone();
        Callback::from(move |criterion: SortCriterion| {
            let mut data = (*query).clone();
            let active = data.criteria.toggle(criterion);
            log::info!("Sort toggled, criterion={}, active={active}", criterion.as_ref());
            query.set(data);
        })
    };

    let on_contact = {
        let contact = contact.clone();
        let phone = props.app.config.contact_phone.clone();
        Callback::from(move |candidate: Candidate| {
            contact.set(Some(ContactCard::for_candidate(&candidate, &phone)));
        })
    };

    let on_close = {
        let contact = contact.clone();
        Callback::from(move |_: ()| contact.set(None))
    };

    html! {
        <div class="container py-4">
            <h2 class="fw-bold mb-4">{props.app.t("jobSeekerListings")}</h2>
            <SearchBar
                value={query.text.clone()}
                placeholder={props.app.t("searchPlaceholder").to_owned()}
                on_change={on_search} />
            <SortToggles
                criteria={query.criteria.clone()}
                locale={props.app.locale}
                on_toggle={on_toggle} />
            <CandidateList candidates={listing} locale={props.app.locale} on_contact={on_contact} />
            if let Some(card) = (*contact).clone() {
                <ContactModal card={card} locale={props.app.locale} on_close={on_close} />
            }
        </div>
    }
}
