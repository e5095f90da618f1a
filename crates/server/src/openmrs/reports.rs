//! Reportingrest datasets and MambaETL dashboard counts

use pmtct_core::{DashboardIndicator, DashboardSummary, DataSet, MambaReport};

use super::client::{ClientError, OpenmrsClient, REST_BASE, segment};

impl OpenmrsClient {
    async fn evaluate_dataset(
        &self,
        definition: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<DataSet>, ClientError> {
        let definition = segment(definition)?;
        self.get_json(&format!("{REST_BASE}/reportingrest/dataSet/{definition}"), query)
            .await
    }

    /// ANC visits recorded for a patient
    pub async fn get_anc_visit_count(
        &self,
        ptracker_id: &str,
        patient_uuid: &str,
    ) -> Result<Option<DataSet>, ClientError> {
        self.evaluate_dataset(
            &self.reports.anc_visits,
            &[("ptracker_id", ptracker_id), ("patient_uuid", patient_uuid)],
        )
        .await
    }

    pub async fn get_estimated_delivery_date(
        &self,
        patient_uuid: &str,
        ptracker_id: &str,
    ) -> Result<Option<DataSet>, ClientError> {
        self.evaluate_dataset(
            &self.reports.edd,
            &[("ptracker_id", ptracker_id), ("patient_uuid", patient_uuid)],
        )
        .await
    }

    pub async fn fetch_mother_hiv_status(
        &self,
        patient_uuid: &str,
        ptracker_id: &str,
    ) -> Result<Option<DataSet>, ClientError> {
        self.evaluate_dataset(
            &self.reports.mother_hiv_status,
            &[("person_uuid", patient_uuid), ("ptracker_id", ptracker_id)],
        )
        .await
    }

    /// Current value of a dashboard indicator, zero when the report is empty
    pub async fn get_indicator(&self, indicator: DashboardIndicator) -> Result<u64, ClientError> {
        let report: Option<MambaReport> = self
            .get_json(
                &format!("{REST_BASE}/mamba/report"),
                &[("report_id", indicator.report_id())],
            )
            .await?;

        match report {
            Some(report) => Ok(report.count(indicator.column())?),
            None => Ok(0),
        }
    }

    /// Count of pregnant women attending first ANC
    pub async fn get_total_pregnant_women(&self) -> Result<u64, ClientError> {
        self.get_indicator(DashboardIndicator::TotalPregnantWomen).await
    }

    /// Unique women who delivered from the start of the fiscal year to date
    pub async fn get_total_deliveries(&self) -> Result<u64, ClientError> {
        self.get_indicator(DashboardIndicator::TotalDeliveries).await
    }

    /// HIV-exposed children enrolled in follow-up care
    pub async fn get_hiv_exposed_infants(&self) -> Result<u64, ClientError> {
        self.get_indicator(DashboardIndicator::HivExposedInfants).await
    }

    /// All three dashboard counts, fetched concurrently
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ClientError> {
        let (total_pregnant_women, total_deliveries, hiv_exposed_infants) = futures::try_join!(
            self.get_total_pregnant_women(),
            self.get_total_deliveries(),
            self.get_hiv_exposed_infants()
        )?;

        Ok(DashboardSummary {
            total_pregnant_women,
            total_deliveries,
            hiv_exposed_infants,
        })
    }
}
