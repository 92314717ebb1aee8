//! Order endpoints
//!
//! The cookbook progression of hypermedia response shapes: a single
//! resource with plain links, a single resource with an embedded shipment,
//! a paginated collection with derived navigation links, and a paginated
//! collection with an embedded shipment per item.

use halyard::prelude::*;

use crate::models::{Order, Shipment};
use crate::state::AppState;

/// Query parameters for the paginated order list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdersQuery {
    /// Restrict to a single user; carried through into every derived link
    pub user_id: Option<u64>,
    /// 0-indexed page number
    pub page: Option<u32>,
    /// Page size, clamped to the configured maximum
    pub size: Option<u32>,
    /// Sort criteria, `field,direction` pairs separated by `;`
    pub sort: Option<String>,
}

/// `GET /orders/{orderId}` — resource with links, no embedded resource
#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<u32>,
) -> Result<ResourceResponse<Order>> {
    let order = state
        .orders
        .find_by_id(order_id)
        .await
        .ok_or_else(|| Error::NotFound(format!("order {order_id}")))?;

    let id = order_id.to_string();
    let params: &[(&str, &str)] = &[("orderId", &id)];

    Ok(ResourceResponse::wrap(order)
        .with_self_link(state.link_for("order", params)?)
        .with_link("shipment", state.link_for("order-shipment", params)?))
}

/// `GET /orders/{orderId}/with-shipment` — resource with an embedded shipment
#[instrument(skip(state))]
pub async fn get_order_with_shipment(
    State(state): State<AppState>,
    Path(order_id): Path<u32>,
) -> Result<ResourceResponse<Order, Shipment>> {
    let order = state
        .orders
        .find_by_id(order_id)
        .await
        .ok_or_else(|| Error::NotFound(format!("order {order_id}")))?;
    let shipment = state
        .shipments
        .find_last_by_order_id(order_id)
        .await
        .ok_or_else(|| Error::NotFound(format!("no shipment for order {order_id}")))?;

    let order_id_str = order_id.to_string();
    let shipment_id = shipment.id.to_string();
    let shipment_link = state
        .link_for("shipment", &[("shipmentId", &shipment_id)])?
        .with_hreflang("en-US");

    Ok(ResourceResponse::wrap(order)
        .with_self_link(state.link_for("order", &[("orderId", &order_id_str)])?)
        .with_embedded(
            "shipment",
            EmbeddedResource::wrap(shipment).with_self_link(shipment_link),
        ))
}

/// `GET /orders` — paginated collection with navigation links
///
/// Each item carries its own `self` link; the collection carries the page
/// block and `self`/`next`/`prev`/`first`/`last` as applicable. The
/// `userId` filter is a passthrough parameter and appears in every derived
/// link.
#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<ListResponse<ResourceResponse<Order>>> {
    let sort = match query.sort.as_deref() {
        Some(raw) => SortCriterion::parse_list(raw)?,
        None => Vec::new(),
    };
    let size = query
        .size
        .unwrap_or(state.default_page_size)
        .min(state.max_page_size);
    let number = query.page.unwrap_or(0);
    let offset = u64::from(number) * u64::from(size);

    let orders = state.orders.find_page(query.user_id, size, offset).await;
    let total_elements = state.orders.count(query.user_id).await;

    debug!(count = orders.len(), total_elements, "assembling order page");

    let mut items = Vec::with_capacity(orders.len());
    for order in orders {
        let id = order.id.to_string();
        let link = state.link_for("order", &[("orderId", &id)])?;
        items.push(ResourceResponse::wrap(order).with_self_link(link));
    }

    let mut assembler = ListAssembler::new(state.routes.lookup("orders")?.clone())
        .with_base_url(&state.base_url);
    if let Some(user_id) = query.user_id {
        assembler = assembler.with_param("userId", user_id);
    }
    assembler.assemble(items, Some(PageRequest::new(size, total_elements, offset)), &sort)
}

/// `GET /orders/detailed` — paginated collection with an embedded shipment
/// per item
///
/// Orders that have no shipment yet carry no `embedded` block; the list
/// itself paginates exactly like [`list_orders`].
#[instrument(skip(state))]
pub async fn list_orders_detailed(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<ListResponse<ResourceResponse<Order, Shipment>>> {
    let sort = match query.sort.as_deref() {
        Some(raw) => SortCriterion::parse_list(raw)?,
        None => Vec::new(),
    };
    let size = query
        .size
        .unwrap_or(state.default_page_size)
        .min(state.max_page_size);
    let number = query.page.unwrap_or(0);
    let offset = u64::from(number) * u64::from(size);

    let orders = state.orders.find_page(query.user_id, size, offset).await;
    let total_elements = state.orders.count(query.user_id).await;

    let mut items = Vec::with_capacity(orders.len());
    for order in orders {
        let order_id = order.id;
        let id = order_id.to_string();
        let mut item = ResourceResponse::wrap(order)
            .with_self_link(state.link_for("order", &[("orderId", &id)])?);
        if let Some(shipment) = state.shipments.find_last_by_order_id(order_id).await {
            let shipment_id = shipment.id.to_string();
            let link = state.link_for("shipment", &[("shipmentId", &shipment_id)])?;
            item = item.with_embedded(
                "shipment",
                EmbeddedResource::wrap(shipment).with_self_link(link),
            );
        }
        items.push(item);
    }

    let mut assembler = ListAssembler::new(state.routes.lookup("orders-detailed")?.clone())
        .with_base_url(&state.base_url);
    if let Some(user_id) = query.user_id {
        assembler = assembler.with_param("userId", user_id);
    }
    assembler.assemble(items, Some(PageRequest::new(size, total_elements, offset)), &sort)
}
