// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Catalogue of telemetry quantities that PM table schemas can bind.
// Author: Lukas Bower

//! Every quantity any registered layout knows about, as closed enums.
//!
//! Labels follow the names used by the community reverse-engineering effort
//! so that exported data lines up with existing tooling.

use core::fmt;
use core::str::FromStr;

/// Error returned when parsing a label that no field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown telemetry field label")]
pub struct UnknownField;

/// Index space an array quantity is addressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// One element per core; bounded by the schema core capacity.
    Core,
    /// One element per L3 cache domain; bounded by the schema cache capacity.
    Cache,
    /// Fixed-size table (DPM levels, link instances) independent of topology.
    Table,
}

macro_rules! telemetry_common {
    ($name:ident { $($variant:ident => $label:literal),+ }) => {
        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];
            /// Number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// Upper-case label of the quantity.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Dense index used for slot tables.
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownField;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|field| field.label().eq_ignore_ascii_case(s.trim()))
                    .ok_or(UnknownField)
            }
        }
    };
}

macro_rules! telemetry_fields {
    ($(#[$meta:meta])* pub enum $name:ident { $($variant:ident => $label:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $label, "`")]
                $variant,
            )+
        }

        telemetry_common!($name { $($variant => $label),+ });
    };
}

macro_rules! telemetry_arrays {
    ($(#[$meta:meta])* pub enum $name:ident {
        $($variant:ident => $label:literal [$domain:ident; $capacity:literal],)+
    }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $label, "`")]
                $variant,
            )+
        }

        telemetry_common!($name { $($variant => $label),+ });

        impl $name {
            /// Index space the quantity lives in.
            #[must_use]
            pub const fn domain(self) -> Domain {
                match self {
                    $(Self::$variant => Domain::$domain,)+
                }
            }

            /// Largest number of elements any layout may bind for the quantity.
            #[must_use]
            pub const fn capacity(self) -> usize {
                match self {
                    $(Self::$variant => $capacity,)+
                }
            }
        }
    };
}

telemetry_fields! {
    /// Scalar telemetry quantities a schema may bind to a single element.
    pub enum Field {
        PptLimit => "PPT_LIMIT",
        PptValue => "PPT_VALUE",
        TdcLimit => "TDC_LIMIT",
        TdcValue => "TDC_VALUE",
        ThmLimit => "THM_LIMIT",
        ThmValue => "THM_VALUE",
        FitLimit => "FIT_LIMIT",
        FitValue => "FIT_VALUE",
        EdcLimit => "EDC_LIMIT",
        EdcValue => "EDC_VALUE",
        VidLimit => "VID_LIMIT",
        VidValue => "VID_VALUE",
        PptWc => "PPT_WC",
        PptActual => "PPT_ACTUAL",
        TdcWc => "TDC_WC",
        TdcActual => "TDC_ACTUAL",
        ThmWc => "THM_WC",
        ThmActual => "THM_ACTUAL",
        FitWc => "FIT_WC",
        FitActual => "FIT_ACTUAL",
        EdcWc => "EDC_WC",
        EdcActual => "EDC_ACTUAL",
        VidWc => "VID_WC",
        VidActual => "VID_ACTUAL",
        VddcrCpuPower => "VDDCR_CPU_POWER",
        VddcrSocPower => "VDDCR_SOC_POWER",
        VddioMemPower => "VDDIO_MEM_POWER",
        Vdd18Power => "VDD18_POWER",
        RocPower => "ROC_POWER",
        SocketPower => "SOCKET_POWER",
        CclkGlobalFreq => "CCLK_GLOBAL_FREQ",
        PptFrequency => "PPT_FREQUENCY",
        TdcFrequency => "TDC_FREQUENCY",
        ThmFrequency => "THM_FREQUENCY",
        HtfmaxFrequency => "HTFMAX_FREQUENCY",
        ProchotFrequency => "PROCHOT_FREQUENCY",
        VoltageFrequency => "VOLTAGE_FREQUENCY",
        CcaFrequency => "CCA_FREQUENCY",
        FitVoltage => "FIT_VOLTAGE",
        LatchupVoltage => "LATCHUP_VOLTAGE",
        CpuSetVoltage => "CPU_SET_VOLTAGE",
        CpuTelemetryVoltage => "CPU_TELEMETRY_VOLTAGE",
        CpuTelemetryCurrent => "CPU_TELEMETRY_CURRENT",
        CpuTelemetryPower => "CPU_TELEMETRY_POWER",
        SocSetVoltage => "SOC_SET_VOLTAGE",
        SocTelemetryVoltage => "SOC_TELEMETRY_VOLTAGE",
        SocTelemetryCurrent => "SOC_TELEMETRY_CURRENT",
        SocTelemetryPower => "SOC_TELEMETRY_POWER",
        FclkFreq => "FCLK_FREQ",
        FclkFreqEff => "FCLK_FREQ_EFF",
        UclkFreq => "UCLK_FREQ",
        MemclkFreq => "MEMCLK_FREQ",
        FclkDramSetpoint => "FCLK_DRAM_SETPOINT",
        FclkDramBusy => "FCLK_DRAM_BUSY",
        FclkGmiSetpoint => "FCLK_GMI_SETPOINT",
        FclkGmiBusy => "FCLK_GMI_BUSY",
        FclkIohcSetpoint => "FCLK_IOHC_SETPOINT",
        FclkIohcBusy => "FCLK_IOHC_BUSY",
        FclkMemLatencySetpoint => "FCLK_MEM_LATENCY_SETPOINT",
        FclkMemLatency => "FCLK_MEM_LATENCY",
        FclkCclkSetpoint => "FCLK_CCLK_SETPOINT",
        FclkCclkFreq => "FCLK_CCLK_FREQ",
        FclkXgmiSetpoint => "FCLK_XGMI_SETPOINT",
        FclkXgmiBusy => "FCLK_XGMI_BUSY",
        CcmReads => "CCM_READS",
        CcmWrites => "CCM_WRITES",
        Ioms => "IOMS",
        Xgmi => "XGMI",
        CsUmcReads => "CS_UMC_READS",
        CsUmcWrites => "CS_UMC_WRITES",
        XgmiSetpoint => "XGMI_SETPOINT",
        XgmiBusy => "XGMI_BUSY",
        XgmiLaneWidth => "XGMI_LANE_WIDTH",
        XgmiDataRate => "XGMI_DATA_RATE",
        SocPower => "SOC_POWER",
        SocTemp => "SOC_TEMP",
        DdrVddpPower => "DDR_VDDP_POWER",
        DdrVddioMemPower => "DDR_VDDIO_MEM_POWER",
        Gmi2VddgPower => "GMI2_VDDG_POWER",
        IoVddcrSocPower => "IO_VDDCR_SOC_POWER",
        IodVddioMemPower => "IOD_VDDIO_MEM_POWER",
        IoVdd18Power => "IO_VDD18_POWER",
        Tdp => "TDP",
        Determinism => "DETERMINISM",
        VVddm => "V_VDDM",
        VVddp => "V_VDDP",
        VVddgIod => "V_VDDG_IOD",
        VVddgCcd => "V_VDDG_CCD",
        PeakTemp => "PEAK_TEMP",
        PeakVoltage => "PEAK_VOLTAGE",
        PeakCclkFreq => "PEAK_CCLK_FREQ",
        AvgCoreCount => "AVG_CORE_COUNT",
        CclkLimit => "CCLK_LIMIT",
        MaxSocVoltage => "MAX_SOC_VOLTAGE",
        DvoVoltage => "DVO_VOLTAGE",
        ApmlPower => "APML_POWER",
        CpuDcBtc => "CPU_DC_BTC",
        SocDcBtc => "SOC_DC_BTC",
        CstateBoost => "CSTATE_BOOST",
        Prochot => "PROCHOT",
        Pc6 => "PC6",
        SelfRefresh => "SELF_REFRESH",
        Pwm => "PWM",
        Socclk => "SOCCLK",
        Shubclk => "SHUBCLK",
        Smnclk => "SMNCLK",
        SmnclkEff => "SMNCLK_EFF",
        Mp0clk => "MP0CLK",
        Mp0clkEff => "MP0CLK_EFF",
        Mp1clk => "MP1CLK",
        Mp1clkEff => "MP1CLK_EFF",
        Mp5clk => "MP5CLK",
        Twixclk => "TWIXCLK",
        Waflclk => "WAFLCLK",
        DpmBusy => "DPM_BUSY",
        Mp1Busy => "MP1_BUSY",
        DpmSkipped => "DPM_SKIPPED",
        FitPreVoltage => "FIT_PRE_VOLTAGE",
        CpuTelemetryVoltage2 => "CPU_TELEMETRY_VOLTAGE2",
        StapmLimit => "STAPM_LIMIT",
        StapmValue => "STAPM_VALUE",
        PptLimitFast => "PPT_LIMIT_FAST",
        PptValueFast => "PPT_VALUE_FAST",
        PptLimitApu => "PPT_LIMIT_APU",
        PptValueApu => "PPT_VALUE_APU",
        TdcLimitSoc => "TDC_LIMIT_SOC",
        TdcValueSoc => "TDC_VALUE_SOC",
        EdcLimitSoc => "EDC_LIMIT_SOC",
        EdcValueSoc => "EDC_VALUE_SOC",
        ThmLimitGfx => "THM_LIMIT_GFX",
        ThmValueGfx => "THM_VALUE_GFX",
        ThmLimitSoc => "THM_LIMIT_SOC",
        ThmValueSoc => "THM_VALUE_SOC",
        SttLimitApu => "STT_LIMIT_APU",
        SttValueApu => "STT_VALUE_APU",
        SttLimitDgpu => "STT_LIMIT_DGPU",
        SttValueDgpu => "STT_VALUE_DGPU",
        Psi0LimitVdd => "PSI0_LIMIT_VDD",
        Psi0ResidencyVdd => "PSI0_RESIDENCY_VDD",
        Psi0LimitSoc => "PSI0_LIMIT_SOC",
        Psi0ResidencySoc => "PSI0_RESIDENCY_SOC",
        PackagePower => "PACKAGE_POWER",
        GlobFrequency => "GLOB_FREQUENCY",
        StapmFrequency => "STAPM_FREQUENCY",
        PptFrequencyFast => "PPT_FREQUENCY_FAST",
        PptFrequencyApu => "PPT_FREQUENCY_APU",
        GfxGlobFrequency => "GFX_GLOB_FREQUENCY",
        GfxStapmFrequency => "GFX_STAPM_FREQUENCY",
        GfxPptFrequencyFast => "GFX_PPT_FREQUENCY_FAST",
        GfxPptFrequency => "GFX_PPT_FREQUENCY",
        GfxPptFrequencyApu => "GFX_PPT_FREQUENCY_APU",
        GfxTdcFrequency => "GFX_TDC_FREQUENCY",
        GfxThmFrequency => "GFX_THM_FREQUENCY",
        GfxHtfmaxFrequency => "GFX_HTFMAX_FREQUENCY",
        GfxProchotFrequency => "GFX_PROCHOT_FREQUENCY",
        GfxVoltageFrequency => "GFX_VOLTAGE_FREQUENCY",
        GfxCcaFrequency => "GFX_CCA_FREQUENCY",
        GfxDemFrequency => "GFX_DEM_FREQUENCY",
        CoreSetpoint => "CORE_SETPOINT",
        CoreBusy => "CORE_BUSY",
        GfxSetpoint => "GFX_SETPOINT",
        GfxBusy => "GFX_BUSY",
        FclkGfxSetpoint => "FCLK_GFX_SETPOINT",
        FclkGfxBusy => "FCLK_GFX_BUSY",
        DfBusy => "DF_BUSY",
        VcnBusy => "VCN_BUSY",
        IohcBusy => "IOHC_BUSY",
        MmhubBusy => "MMHUB_BUSY",
        AthubBusy => "ATHUB_BUSY",
        OsssysBusy => "OSSSYS_BUSY",
        HdpBusy => "HDP_BUSY",
        SdmaBusy => "SDMA_BUSY",
        ShubBusy => "SHUB_BUSY",
        BifBusy => "BIF_BUSY",
        AcpBusy => "ACP_BUSY",
        Sst0Busy => "SST0_BUSY",
        Sst1Busy => "SST1_BUSY",
        Usb0Busy => "USB0_BUSY",
        Usb1Busy => "USB1_BUSY",
        Gcm64bReads => "GCM_64B_READS",
        Gcm64bWrites => "GCM_64B_WRITES",
        Gcm32bReadsWrites => "GCM_32B_READS_WRITES",
        MmhubReads => "MMHUB_READS",
        MmhubWrites => "MMHUB_WRITES",
        DceReads => "DCE_READS",
        IoReadsWrites => "IO_READS_WRITES",
        MaxDramBandwidth => "MAX_DRAM_BANDWIDTH",
        VcnDecode => "VCN_DECODE",
        VcnEncodeGen => "VCN_ENCODE_GEN",
        VcnEncodeLow => "VCN_ENCODE_LOW",
        VcnEncodeReal => "VCN_ENCODE_REAL",
        VcnPg => "VCN_PG",
        VcnJpeg => "VCN_JPEG",
        GfxVoltage => "GFX_VOLTAGE",
        GfxTemp => "GFX_TEMP",
        GfxIddmax => "GFX_IDDMAX",
        GfxFreq => "GFX_FREQ",
        GfxFreqeff => "GFX_FREQEFF",
        GfxCgpg => "GFX_CGPG",
        GfxEdcLim => "GFX_EDC_LIM",
        GfxEdcResidency => "GFX_EDC_RESIDENCY",
        GfxDemResidency => "GFX_DEM_RESIDENCY",
        VclkFreq => "VCLK_FREQ",
        DclkFreq => "DCLK_FREQ",
        DcfFreq => "DCF_FREQ",
        UclkFreqEff => "UCLK_FREQ_EFF",
        MemclkFreqEff => "MEMCLK_FREQ_EFF",
        VclkFreqEff => "VCLK_FREQ_EFF",
        DclkFreqEff => "DCLK_FREQ_EFF",
        DcfFreqEff => "DCF_FREQ_EFF",
        Cpuoff => "CPUOFF",
        CpuoffCnt => "CPUOFF_CNT",
        Gfxoff => "GFXOFF",
        GfxoffCnt => "GFXOFF_CNT",
        Vddoff => "VDDOFF",
        VddoffCnt => "VDDOFF_CNT",
        Ulv => "ULV",
        UlvCnt => "ULV_CNT",
        S0i2 => "S0I2",
        S0i2Cnt => "S0I2_CNT",
        Whisper => "WHISPER",
        WhisperCnt => "WHISPER_CNT",
        Selfrefresh0 => "SELFREFRESH0",
        Selfrefresh1 => "SELFREFRESH1",
        PllPowerdown0 => "PLL_POWERDOWN_0",
        PllPowerdown1 => "PLL_POWERDOWN_1",
        PllPowerdown2 => "PLL_POWERDOWN_2",
        PllPowerdown3 => "PLL_POWERDOWN_3",
        PllPowerdown4 => "PLL_POWERDOWN_4",
        DgpuPower => "DGPU_POWER",
        DgpuGfxBusy => "DGPU_GFX_BUSY",
        DgpuFreqTarget => "DGPU_FREQ_TARGET",
        DdrPhyPower => "DDR_PHY_POWER",
        IoDisplayPower => "IO_DISPLAY_POWER",
        IoUsbPower => "IO_USB_POWER",
        UlvVoltage => "ULV_VOLTAGE",
        MaxCoreVoltage => "MAX_CORE_VOLTAGE",
        DcBtc => "DC_BTC",
        Fps => "FPS",
        DisplayCount => "DISPLAY_COUNT",
        StapmTimeConstant => "STAPM_TIME_CONSTANT",
        SlowPptTimeConstant => "SLOW_PPT_TIME_CONSTANT",
        Mp2clk => "MP2CLK",
        Aclk => "ACLK",
        Dispclk => "DISPCLK",
        Dprefclk => "DPREFCLK",
        Dppclk => "DPPCLK",
        SmuBusy => "SMU_BUSY",
        SmuSkipCounter => "SMU_SKIP_COUNTER",
        VVddg => "V_VDDG",
        PVddm => "P_VDDM",
        SkinTempMargin => "SKIN_TEMP_MARGIN",
        GfxDuty => "GFX_DUTY",
    }
}

telemetry_arrays! {
    /// Indexed telemetry quantities (per core, per cache domain, or fixed tables).
    pub enum ArrayField {
        FclkResidency => "FCLK_RESIDENCY" [Table; 4],
        FclkFreqTable => "FCLK_FREQ_TABLE" [Table; 4],
        UclkFreqTable => "UCLK_FREQ_TABLE" [Table; 4],
        MemclkFreqTable => "MEMCLK_FREQ_TABLE" [Table; 4],
        FclkVoltage => "FCLK_VOLTAGE" [Table; 4],
        LclkSetpoint => "LCLK_SETPOINT" [Table; 4],
        LclkBusy => "LCLK_BUSY" [Table; 4],
        LclkFreq => "LCLK_FREQ" [Table; 4],
        LclkFreqEff => "LCLK_FREQ_EFF" [Table; 4],
        LclkMaxDpm => "LCLK_MAX_DPM" [Table; 4],
        LclkMinDpm => "LCLK_MIN_DPM" [Table; 4],
        SocclkFreqEff => "SOCCLK_FREQ_EFF" [Table; 4],
        ShubclkFreqEff => "SHUBCLK_FREQ_EFF" [Table; 4],
        CorePower => "CORE_POWER" [Core; 16],
        CoreVoltage => "CORE_VOLTAGE" [Core; 16],
        CoreTemp => "CORE_TEMP" [Core; 16],
        CoreFit => "CORE_FIT" [Core; 16],
        CoreIddmax => "CORE_IDDMAX" [Core; 16],
        CoreFreq => "CORE_FREQ" [Core; 16],
        CoreFreqeff => "CORE_FREQEFF" [Core; 16],
        CoreC0 => "CORE_C0" [Core; 16],
        CoreCc1 => "CORE_CC1" [Core; 16],
        CoreCc6 => "CORE_CC6" [Core; 16],
        CoreCksFdd => "CORE_CKS_FDD" [Core; 16],
        CoreCiFdd => "CORE_CI_FDD" [Core; 16],
        CoreIrm => "CORE_IRM" [Core; 16],
        CorePstate => "CORE_PSTATE" [Core; 16],
        CoreFreqLimMax => "CORE_FREQ_LIM_MAX" [Core; 16],
        CoreFreqLimMin => "CORE_FREQ_LIM_MIN" [Core; 16],
        CoreScLimit => "CORE_SC_LIMIT" [Core; 16],
        CoreScCac => "CORE_SC_CAC" [Core; 16],
        CoreScResidency => "CORE_SC_RESIDENCY" [Core; 16],
        CoreUopsClk => "CORE_UOPS_CLK" [Core; 16],
        CoreUops => "CORE_UOPS" [Core; 16],
        CoreMemLatency => "CORE_MEM_LATENCY" [Core; 16],
        L3LogicPower => "L3_LOGIC_POWER" [Cache; 4],
        L3VddmPower => "L3_VDDM_POWER" [Cache; 4],
        L3Temp => "L3_TEMP" [Cache; 4],
        L3Fit => "L3_FIT" [Cache; 4],
        L3Iddmax => "L3_IDDMAX" [Cache; 4],
        L3Freq => "L3_FREQ" [Cache; 4],
        L3FreqEff => "L3_FREQ_EFF" [Cache; 4],
        L3CksFdd => "L3_CKS_FDD" [Cache; 4],
        L3CcaThreshold => "L3_CCA_THRESHOLD" [Cache; 4],
        L3CcaCac => "L3_CCA_CAC" [Cache; 4],
        L3CcaActivation => "L3_CCA_ACTIVATION" [Cache; 4],
        L3EdcLimit => "L3_EDC_LIMIT" [Cache; 4],
        L3EdcCac => "L3_EDC_CAC" [Cache; 4],
        L3EdcResidency => "L3_EDC_RESIDENCY" [Cache; 4],
        L3FllBtc => "L3_FLL_BTC" [Cache; 4],
        Mp5Busy => "MP5_BUSY" [Cache; 4],
        CoreUnknown => "CORE_UNKNOWN" [Core; 16],
        CoreCppcMax => "CORE_CPPC_MAX" [Core; 8],
        CoreCppcMin => "CORE_CPPC_MIN" [Core; 8],
        CoreCppcEpp => "CORE_CPPC_EPP" [Core; 8],
        VclkState => "VCLK_STATE" [Table; 8],
        DclkState => "DCLK_STATE" [Table; 8],
        SocclkState => "SOCCLK_STATE" [Table; 8],
        LclkState => "LCLK_STATE" [Table; 8],
        ShubState => "SHUB_STATE" [Table; 8],
        Mp0State => "MP0_STATE" [Table; 8],
        DcfclkState => "DCFCLK_STATE" [Table; 8],
        VcnStateResidency => "VCN_STATE_RESIDENCY" [Table; 8],
        SocclkStateResidency => "SOCCLK_STATE_RESIDENCY" [Table; 8],
        LclkStateResidency => "LCLK_STATE_RESIDENCY" [Table; 8],
        ShubStateResidency => "SHUB_STATE_RESIDENCY" [Table; 8],
        Mp0clkStateResidency => "MP0CLK_STATE_RESIDENCY" [Table; 8],
        DcfclkStateResidency => "DCFCLK_STATE_RESIDENCY" [Table; 8],
        VddcrSocVoltage => "VDDCR_SOC_VOLTAGE" [Table; 8],
        ThmValueCores => "THM_VALUE_CORES" [Core; 16],
    }
}

/// Longest array any quantity can carry.
pub const MAX_ARRAY_LEN: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        assert_eq!("ppt_limit".parse::<Field>(), Ok(Field::PptLimit));
        assert_eq!("CORE_POWER".parse::<ArrayField>(), Ok(ArrayField::CorePower));
        assert_eq!("NOT_A_FIELD".parse::<Field>(), Err(UnknownField));
    }

    #[test]
    fn capacities_fit_slot_tables() {
        for field in ArrayField::ALL {
            assert!(field.capacity() <= MAX_ARRAY_LEN, "{field}");
        }
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in Field::ALL.iter().enumerate() {
            for b in &Field::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
