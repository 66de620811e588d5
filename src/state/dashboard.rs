// ============================================================================
// DASHBOARD STATE - pipeline de orden + filtros sobre los envíos
// ============================================================================
// Recompute-on-change: toda mutación pasa por un setter que rearma el view
// set (orden y luego filtros). El view set es siempre una derivación fresca,
// nunca se muta por separado.
// ============================================================================

use std::collections::BTreeSet;

use crate::models::Shipment;
use crate::utils::{format_inr, sort_key};

/// Sentinel "mostrar todo" para los filtros de estado y de región
pub const FILTER_ALL: &str = "ALL";

/// Contadores del view set actual
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Summary {
    pub total_count: usize,
    pub cod_count: usize,
    pub prepaid_count: usize,
    pub cod_total_amount: f64,
}

impl Summary {
    /// Total COD formateado para display (agrupación en-IN)
    pub fn cod_total_display(&self) -> String {
        format!("₹{}", format_inr(self.cod_total_amount))
    }
}

/// Entrada del selector de parties (solo admin)
#[derive(Clone, PartialEq, Debug)]
pub struct Party {
    /// "{organización} - {código de región}"
    pub label: String,
    /// Valor seleccionable: el código de región
    pub region_code: String,
}

/// Estado del dashboard: set completo, filtros activos y view set derivado
#[derive(Clone, PartialEq, Debug)]
pub struct Dashboard {
    all: Vec<Shipment>,
    view: Vec<Shipment>,
    status_filter: String,
    region_filter: String,
    query: String,
    newest_first: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            view: Vec::new(),
            status_filter: FILTER_ALL.to_string(),
            region_filter: FILTER_ALL.to_string(),
            query: String::new(),
            newest_first: true,
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------- lectura ----------------

    pub fn view(&self) -> &[Shipment] {
        &self.view
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn status_filter(&self) -> &str {
        &self.status_filter
    }

    pub fn region_filter(&self) -> &str {
        &self.region_filter
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn newest_first(&self) -> bool {
        self.newest_first
    }

    /// Organización del primer envío (título de la vista de una party)
    pub fn first_org_name(&self) -> Option<&str> {
        self.all.first().map(|s| s.pickup_org_name.as_str())
    }

    // ---------------- mutación (recompute atómico) ----------------

    /// Carga el set completo (una vez por page load)
    pub fn set_records(&mut self, records: Vec<Shipment>) {
        self.all = records;
        self.sort_records();
        self.apply_filters();
    }

    pub fn set_status_filter(&mut self, group: String) {
        self.status_filter = group;
        self.apply_filters();
    }

    pub fn set_region_filter(&mut self, region: String) {
        self.region_filter = region;
        self.apply_filters();
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.apply_filters();
    }

    /// Invierte la dirección de orden; el orden se reaplica antes de filtrar
    pub fn toggle_sort(&mut self) {
        self.newest_first = !self.newest_first;
        self.sort_records();
        self.apply_filters();
    }

    // ---------------- derivaciones ----------------

    /// Ordena el set completo por fecha de entrega. Clave 0 (fecha vacía o
    /// no parseable) queda en el extremo "más antiguo" en ambas direcciones.
    fn sort_records(&mut self) {
        let newest_first = self.newest_first;
        self.all.sort_by(|a, b| {
            let ka = sort_key(&a.delivery_date);
            let kb = sort_key(&b.delivery_date);
            if newest_first {
                kb.cmp(&ka)
            } else {
                ka.cmp(&kb)
            }
        });
    }

    /// Rearma el view set: AND de estado, región y búsqueda
    fn apply_filters(&mut self) {
        let status_upper = self.status_filter.to_uppercase();
        let query_lower = self.query.to_lowercase();

        self.view = self
            .all
            .iter()
            .filter(|s| {
                // Igualdades baratas primero, el scan de substring al final
                let m_status = self.status_filter == FILTER_ALL
                    || s.display_group.to_uppercase() == status_upper;
                if !m_status {
                    return false;
                }

                let m_region =
                    self.region_filter == FILTER_ALL || s.region_code == self.region_filter;
                if !m_region {
                    return false;
                }

                query_lower.is_empty()
                    || s.awb.to_lowercase().contains(&query_lower)
                    || s.city.to_lowercase().contains(&query_lower)
                    || s.consignee_name.to_lowercase().contains(&query_lower)
            })
            .cloned()
            .collect();
    }

    /// Contadores del view set actual. COD cuenta solo con payment_mode
    /// exactamente "COD"; todo lo demás (incluido vacío) es prepaid.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total_count: self.view.len(),
            ..Summary::default()
        };

        for s in &self.view {
            if s.payment_mode == "COD" {
                summary.cod_count += 1;
                summary.cod_total_amount += s.cod_amount;
            } else {
                summary.prepaid_count += 1;
            }
        }

        summary
    }

    /// Parties distintas (organización, región) sobre el set completo,
    /// ordenadas y sin duplicados. Solo entradas con ambos campos.
    pub fn party_list(&self) -> Vec<Party> {
        let set: BTreeSet<(String, String)> = self
            .all
            .iter()
            .filter(|s| !s.pickup_org_name.is_empty() && !s.region_code.is_empty())
            .map(|s| (s.pickup_org_name.clone(), s.region_code.clone()))
            .collect();

        set.into_iter()
            .map(|(org, region_code)| Party {
                label: format!("{} - {}", org, region_code),
                region_code,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{display_group, normalize_raw_status, StatusClass};

    fn shipment(awb: &str, delivery_date: &str) -> Shipment {
        let raw_status = normalize_raw_status("SHIPPED");
        Shipment {
            awb: awb.to_string(),
            pickup_org_name: "Acme Traders".to_string(),
            consignee_name: "No Name".to_string(),
            city: "No City".to_string(),
            pickup_date: String::new(),
            delivery_date: delivery_date.to_string(),
            display_group: display_group(&raw_status),
            status_class: StatusClass::classify(&raw_status),
            raw_status,
            payment_mode: String::new(),
            cod_amount: 0.0,
            region_code: "110001".to_string(),
            phone_digits: String::new(),
        }
    }

    fn with_status(mut s: Shipment, raw: &str) -> Shipment {
        s.raw_status = normalize_raw_status(raw);
        s.display_group = display_group(&s.raw_status);
        s.status_class = StatusClass::classify(&s.raw_status);
        s
    }

    fn awbs(view: &[Shipment]) -> Vec<&str> {
        view.iter().map(|s| s.awb.as_str()).collect()
    }

    #[test]
    fn newest_first_orders_by_delivery_date() {
        let mut d = Dashboard::new();
        d.set_records(vec![
            shipment("A", "01/01/2024"),
            shipment("B", "15/01/2024"),
            shipment("C", ""),
        ]);

        // Fecha vacía = clave 0 = extremo más antiguo, al final
        assert_eq!(awbs(d.view()), vec!["B", "A", "C"]);
    }

    #[test]
    fn oldest_first_keeps_empty_dates_at_the_old_extreme() {
        let mut d = Dashboard::new();
        d.set_records(vec![
            shipment("A", "01/01/2024"),
            shipment("B", "15/01/2024"),
            shipment("C", ""),
        ]);
        d.toggle_sort();

        assert!(!d.newest_first());
        assert_eq!(awbs(d.view()), vec!["C", "A", "B"]);
    }

    #[test]
    fn status_filter_excludes_other_groups() {
        let mut d = Dashboard::new();
        let mut rto = with_status(shipment("R1", "10/01/2024"), "RETURNED TO ORIGIN");
        rto.city = "Delhi".to_string();
        let delivered = with_status(shipment("D1", "11/01/2024"), "DELIVERED");
        d.set_records(vec![rto, delivered]);

        d.set_status_filter("DELIVERED".to_string());

        // El RTO queda afuera aunque región y búsqueda lo incluirían
        assert_eq!(awbs(d.view()), vec!["D1"]);
    }

    #[test]
    fn status_filter_is_case_insensitive() {
        let mut d = Dashboard::new();
        d.set_records(vec![with_status(shipment("P1", ""), "READY FOR SHIP")]);

        d.set_status_filter("PENDING PICKUP".to_string());
        assert_eq!(d.view().len(), 1);

        d.set_status_filter("Pending Pickup".to_string());
        assert_eq!(d.view().len(), 1);
    }

    #[test]
    fn region_filter_is_exact() {
        let mut d = Dashboard::new();
        let mut other = shipment("B", "");
        other.region_code = "400001".to_string();
        d.set_records(vec![shipment("A", ""), other]);

        d.set_region_filter("110001".to_string());
        assert_eq!(awbs(d.view()), vec!["A"]);

        d.set_region_filter(FILTER_ALL.to_string());
        assert_eq!(d.view().len(), 2);
    }

    #[test]
    fn query_matches_awb_city_or_consignee() {
        let mut d = Dashboard::new();
        let mut a = shipment("AWB777", "");
        a.city = "Mumbai".to_string();
        let mut b = shipment("B", "");
        b.consignee_name = "Priya Sharma".to_string();
        d.set_records(vec![a, b]);

        d.set_query("awb7".to_string());
        assert_eq!(awbs(d.view()), vec!["AWB777"]);

        d.set_query("MUMBAI".to_string());
        assert_eq!(awbs(d.view()), vec!["AWB777"]);

        d.set_query("sharma".to_string());
        assert_eq!(awbs(d.view()), vec!["B"]);

        d.set_query(String::new());
        assert_eq!(d.view().len(), 2);
    }

    #[test]
    fn filters_combine_with_and() {
        let mut d = Dashboard::new();
        let mut match_all = with_status(shipment("M", "01/02/2024"), "DELIVERED");
        match_all.city = "Delhi".to_string();
        let wrong_region = {
            let mut s = with_status(shipment("W", "01/02/2024"), "DELIVERED");
            s.city = "Delhi".to_string();
            s.region_code = "999999".to_string();
            s
        };
        d.set_records(vec![match_all, wrong_region]);

        d.set_status_filter("DELIVERED".to_string());
        d.set_region_filter("110001".to_string());
        d.set_query("delhi".to_string());

        assert_eq!(awbs(d.view()), vec!["M"]);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut d = Dashboard::new();
        d.set_records(vec![
            shipment("A", "01/01/2024"),
            shipment("B", "15/01/2024"),
            shipment("C", ""),
        ]);
        d.set_query("a".to_string());

        let first = d.view().to_vec();
        d.set_query("a".to_string());

        assert_eq!(d.view(), first.as_slice());
    }

    #[test]
    fn summary_splits_cod_and_prepaid() {
        let mut d = Dashboard::new();
        let mut cod = shipment("C", "");
        cod.payment_mode = "COD".to_string();
        cod.cod_amount = 500.0;
        let mut prepaid = shipment("P", "");
        prepaid.payment_mode = "PREPAID".to_string();
        d.set_records(vec![cod, prepaid]);

        let summary = d.summary();
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.cod_count, 1);
        assert_eq!(summary.prepaid_count, 1);
        assert_eq!(summary.cod_total_amount, 500.0);
    }

    #[test]
    fn empty_payment_mode_counts_as_prepaid() {
        let mut d = Dashboard::new();
        d.set_records(vec![shipment("X", "")]);

        let summary = d.summary();
        assert_eq!(summary.cod_count, 0);
        assert_eq!(summary.prepaid_count, 1);
    }

    #[test]
    fn summary_follows_the_view_set() {
        let mut d = Dashboard::new();
        let mut cod = with_status(shipment("C", ""), "DELIVERED");
        cod.payment_mode = "COD".to_string();
        cod.cod_amount = 750.0;
        let prepaid = with_status(shipment("P", ""), "SHIPPED");
        d.set_records(vec![cod, prepaid]);

        d.set_status_filter("DELIVERED".to_string());

        let summary = d.summary();
        assert_eq!(summary.total_count, 1);
        assert_eq!(summary.cod_total_amount, 750.0);
        assert_eq!(summary.cod_total_display(), "₹750");
    }

    #[test]
    fn party_list_is_sorted_and_distinct() {
        let mut d = Dashboard::new();
        let mut b = shipment("B", "");
        b.pickup_org_name = "Beta Logistics".to_string();
        b.region_code = "400001".to_string();
        let mut no_region = shipment("N", "");
        no_region.region_code = String::new();
        d.set_records(vec![shipment("A1", ""), shipment("A2", ""), b, no_region]);

        let parties = d.party_list();
        let labels: Vec<&str> = parties.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Acme Traders - 110001", "Beta Logistics - 400001"]);
        assert_eq!(parties[1].region_code, "400001");
    }
}
