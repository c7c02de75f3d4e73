//! The fixed tables backing every dashboard section.
//!
//! Synthetic Chilean labor market data, frozen at generation time. The
//! tables are process-wide constants; every consumer reads them in
//! declaration order and derives its own views.

use crate::models::{
    EmploymentSeriesPoint, HistoricalPoint, JobPosting, MetricIcon, MetricRecord, PostingStatus,
    SectorRecord, Trend,
};

/// The four headline metric cards.
pub const METRICS: [MetricRecord; 4] = [
    MetricRecord {
        title: "Tasa de Desempleo",
        value: "8.7%",
        change: "-0.3%",
        trend: Trend::Up,
        icon: MetricIcon::Workforce,
    },
    MetricRecord {
        title: "Sueldo Promedio",
        value: "$720.450",
        change: "+4.2%",
        trend: Trend::Up,
        icon: MetricIcon::Salary,
    },
    MetricRecord {
        title: "Nuevos Empleos",
        value: "45.230",
        change: "+12.5%",
        trend: Trend::Up,
        icon: MetricIcon::Hiring,
    },
    MetricRecord {
        title: "Empresas Contratando",
        value: "3.847",
        change: "+8.3%",
        trend: Trend::Up,
        icon: MetricIcon::Companies,
    },
];

/// Monthly employment series for the current year (Jan-Aug).
pub const EMPLOYMENT_SERIES: [EmploymentSeriesPoint; 8] = [
    EmploymentSeriesPoint { month: "Ene", unemployment_rate: 9.2, jobs_created: 32_000, average_salary: 680 },
    EmploymentSeriesPoint { month: "Feb", unemployment_rate: 9.0, jobs_created: 35_000, average_salary: 685 },
    EmploymentSeriesPoint { month: "Mar", unemployment_rate: 8.9, jobs_created: 38_000, average_salary: 690 },
    EmploymentSeriesPoint { month: "Abr", unemployment_rate: 8.8, jobs_created: 41_000, average_salary: 695 },
    EmploymentSeriesPoint { month: "May", unemployment_rate: 8.7, jobs_created: 43_000, average_salary: 705 },
    EmploymentSeriesPoint { month: "Jun", unemployment_rate: 8.5, jobs_created: 45_000, average_salary: 710 },
    EmploymentSeriesPoint { month: "Jul", unemployment_rate: 8.6, jobs_created: 44_000, average_salary: 715 },
    EmploymentSeriesPoint { month: "Ago", unemployment_rate: 8.7, jobs_created: 45_230, average_salary: 720 },
];

/// Employment head count by economic sector.
pub const SECTORS: [SectorRecord; 6] = [
    SectorRecord { sector: "Tecnología", jobs: 145_000 },
    SectorRecord { sector: "Comercio", jobs: 320_000 },
    SectorRecord { sector: "Salud", jobs: 187_000 },
    SectorRecord { sector: "Educación", jobs: 210_000 },
    SectorRecord { sector: "Construcción", jobs: 154_000 },
    SectorRecord { sector: "Minería", jobs: 98_000 },
];

/// Ten years of annual labor market history (2015-2024).
pub const HISTORICAL_SERIES: [HistoricalPoint; 10] = [
    HistoricalPoint { year: 2015, unemployment_rate: 6.4, total_employment: 7_850_000, postings_published: 45_000 },
    HistoricalPoint { year: 2016, unemployment_rate: 6.7, total_employment: 7_920_000, postings_published: 47_000 },
    HistoricalPoint { year: 2017, unemployment_rate: 7.1, total_employment: 8_050_000, postings_published: 51_000 },
    HistoricalPoint { year: 2018, unemployment_rate: 7.3, total_employment: 8_180_000, postings_published: 55_000 },
    HistoricalPoint { year: 2019, unemployment_rate: 7.2, total_employment: 8_320_000, postings_published: 58_000 },
    HistoricalPoint { year: 2020, unemployment_rate: 10.8, total_employment: 7_950_000, postings_published: 32_000 },
    HistoricalPoint { year: 2021, unemployment_rate: 9.4, total_employment: 8_150_000, postings_published: 42_000 },
    HistoricalPoint { year: 2022, unemployment_rate: 8.6, total_employment: 8_480_000, postings_published: 65_000 },
    HistoricalPoint { year: 2023, unemployment_rate: 8.2, total_employment: 8_720_000, postings_published: 72_000 },
    HistoricalPoint { year: 2024, unemployment_rate: 8.7, total_employment: 8_850_000, postings_published: 78_000 },
];

/// Recent job postings, declaration order EMP001 first.
pub const JOB_POSTINGS: [JobPosting; 8] = [
    JobPosting {
        id: "EMP001",
        date: "2024-01-15",
        company: "Falabella",
        position: "Desarrollador Full Stack",
        salary: 1_800_000,
        sector: "Tecnología",
        status: PostingStatus::Active,
    },
    JobPosting {
        id: "EMP002",
        date: "2024-01-15",
        company: "Banco de Chile",
        position: "Analista de Datos",
        salary: 1_500_000,
        sector: "Finanzas",
        status: PostingStatus::Active,
    },
    JobPosting {
        id: "EMP003",
        date: "2024-01-14",
        company: "Codelco",
        position: "Ingeniero de Minas",
        salary: 2_200_000,
        sector: "Minería",
        status: PostingStatus::Closed,
    },
    JobPosting {
        id: "EMP004",
        date: "2024-01-14",
        company: "Ripley",
        position: "Gerente de Ventas",
        salary: 1_600_000,
        sector: "Comercio",
        status: PostingStatus::Active,
    },
    JobPosting {
        id: "EMP005",
        date: "2024-01-13",
        company: "Hospital Clínico UC",
        position: "Enfermero/a Especializado",
        salary: 950_000,
        sector: "Salud",
        status: PostingStatus::Active,
    },
    JobPosting {
        id: "EMP006",
        date: "2024-01-13",
        company: "Universidad de Chile",
        position: "Profesor de Ingeniería",
        salary: 1_400_000,
        sector: "Educación",
        status: PostingStatus::UnderReview,
    },
    JobPosting {
        id: "EMP007",
        date: "2024-01-12",
        company: "Movistar Chile",
        position: "Ingeniero de Telecomunicaciones",
        salary: 1_750_000,
        sector: "Tecnología",
        status: PostingStatus::Active,
    },
    JobPosting {
        id: "EMP008",
        date: "2024-01-12",
        company: "Constructora Salfa",
        position: "Arquitecto de Proyectos",
        salary: 1_650_000,
        sector: "Construcción",
        status: PostingStatus::Active,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn posting_ids_are_unique() {
        let ids: HashSet<&str> = JOB_POSTINGS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), JOB_POSTINGS.len());
    }

    #[test]
    fn historical_series_covers_2015_to_2024_in_order() {
        let years: Vec<i32> = HISTORICAL_SERIES.iter().map(|p| p.year).collect();
        assert_eq!(years, (2015..=2024).collect::<Vec<_>>());
    }

    #[test]
    fn employment_series_is_january_through_august() {
        assert_eq!(EMPLOYMENT_SERIES[0].month, "Ene");
        assert_eq!(EMPLOYMENT_SERIES[EMPLOYMENT_SERIES.len() - 1].month, "Ago");
        assert_eq!(EMPLOYMENT_SERIES.len(), 8);
    }
}
