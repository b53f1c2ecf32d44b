// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Zen and Zen+ APU PM table layouts.
// Author: Lukas Bower

use crate::field::ArrayField::*;
use crate::field::Field::*;
use crate::schema::{at, element, run, strided, Generation, Schema, SchemaFlags};

/// Layout reported as version `0x1E0004`.
pub const PM_TABLE_1E0004: Schema = Schema {
    version: 0x001E_0004,
    generation: Generation::Zen1,
    core_capacity: 4,
    cache_capacity: 1,
    min_size: 1552,
    flags: SchemaFlags::HAS_GRAPHICS,
    bindings: &[
        at(StapmLimit, 0),
        at(StapmValue, 1),
        at(PptLimitFast, 2),
        at(PptValueFast, 3),
        at(PptLimit, 4),
        at(PptValue, 5),
        at(TdcLimit, 6),
        at(TdcValue, 7),
        at(TdcLimitSoc, 8),
        at(TdcValueSoc, 9),
        at(EdcLimit, 10),
        at(EdcLimitSoc, 13),
        at(ThmLimit, 20),
        strided(ThmValueCores, 21, 4, 2),
        at(ThmLimitGfx, 30),
        at(ThmValueGfx, 31),
        at(ThmLimitSoc, 32),
        at(ThmValueSoc, 33),
        at(FitLimit, 34),
        at(FitValue, 35),
        at(VidValue, 61),
        at(VidLimit, 57),
        at(VVddm, 59),
        at(VVddp, 60),
        at(CpuSetVoltage, 61),
        at(SocSetVoltage, 65),
        at(DfBusy, 69),
        at(VcnBusy, 70),
        at(IohcBusy, 71),
        at(MmhubBusy, 72),
        at(AthubBusy, 73),
        at(OsssysBusy, 74),
        at(HdpBusy, 75),
        at(SdmaBusy, 76),
        at(ShubBusy, 77),
        at(BifBusy, 78),
        at(AcpBusy, 79),
        at(Sst0Busy, 81),
        at(Sst1Busy, 82),
        at(Usb0Busy, 83),
        at(Usb1Busy, 84),
        at(CcmReads, 85),
        at(CcmWrites, 86),
        at(Gcm64bReads, 87),
        at(Gcm64bWrites, 88),
        at(MmhubReads, 89),
        at(MmhubWrites, 90),
        at(DceReads, 91),
        at(IoReadsWrites, 92),
        at(CsUmcReads, 93),
        at(CsUmcWrites, 94),
        at(MaxDramBandwidth, 95),
        run(CorePower, 96, 4),
        run(CoreVoltage, 104, 4),
        run(CoreTemp, 108, 4),
        run(CoreFit, 112, 4),
        run(CoreIddmax, 116, 4),
        run(CoreFreq, 120, 4),
        run(CoreFreqeff, 124, 4),
        run(CoreC0, 128, 4),
        run(CoreCc1, 132, 4),
        run(CoreCc6, 136, 4),
        run(CorePstate, 140, 4),
        at(PVddm, 144),
        element(L3Temp, 0, 146),
        element(L3Fit, 0, 147),
        element(L3Iddmax, 0, 148),
        element(L3Freq, 0, 149),
        at(GfxVoltage, 150),
        at(GfxTemp, 151),
        at(GfxIddmax, 153),
        at(GfxFreq, 154),
        at(GfxFreqeff, 155),
        at(GfxBusy, 156),
        at(GfxCgpg, 157),
        at(SocPower, 160),
        at(SocTemp, 161),
        at(DdrPhyPower, 163),
        at(FclkFreq, 166),
        at(UclkFreq, 167),
        at(MemclkFreq, 168),
        at(VclkFreq, 169),
        at(DclkFreq, 170),
        at(Socclk, 171),
        element(LclkFreq, 0, 172),
        at(Shubclk, 173),
        at(Mp0clk, 174),
        at(DcfFreq, 177),
        at(FclkFreqEff, 178),
        at(UclkFreqEff, 179),
        at(MemclkFreqEff, 180),
        at(VclkFreqEff, 181),
        at(DclkFreqEff, 182),
        element(SocclkFreqEff, 0, 183),
        element(LclkFreqEff, 0, 184),
        element(ShubclkFreqEff, 0, 185),
        at(Mp0clkEff, 186),
        at(DcfFreqEff, 189),
        run(VclkState, 190, 8),
        run(DclkState, 198, 8),
        run(SocclkState, 230, 8),
        run(LclkState, 238, 8),
        run(ShubState, 246, 8),
        run(Mp0State, 254, 8),
        run(DcfclkState, 270, 4),
        run(VcnStateResidency, 282, 8),
        run(SocclkStateResidency, 290, 8),
        run(LclkStateResidency, 298, 8),
        run(ShubStateResidency, 306, 8),
        run(Mp0clkStateResidency, 314, 8),
        run(DcfclkStateResidency, 330, 4),
        run(VddcrSocVoltage, 334, 8),
        at(DisplayCount, 342),
        at(Cpuoff, 345),
        at(CpuoffCnt, 346),
        at(Gfxoff, 347),
        at(GfxoffCnt, 348),
        at(Vddoff, 349),
        at(VddoffCnt, 350),
        at(Ulv, 351),
        at(UlvCnt, 352),
        at(S0i2, 353),
        at(S0i2Cnt, 354),
        at(Whisper, 355),
        at(WhisperCnt, 356),
        at(Selfrefresh0, 357),
        at(Selfrefresh1, 356),
        at(PllPowerdown0, 357),
        at(PllPowerdown1, 358),
        at(PllPowerdown2, 359),
        at(PllPowerdown4, 360),
        at(PptValueApu, 361),
        at(RocPower, 363),
        at(IodVddioMemPower, 364),
        at(DgpuPower, 368),
        at(DgpuGfxBusy, 369),
        at(PeakTemp, 370),
        at(SkinTempMargin, 371),
        at(Pwm, 373),
        at(CstateBoost, 374),
        at(Prochot, 375),
        at(GfxDuty, 376),
        at(Fps, 377),
        at(StapmTimeConstant, 378),
        at(SlowPptTimeConstant, 379),
        at(Mp1clk, 380),
        at(Mp2clk, 381),
        at(Smnclk, 382),
        at(Dispclk, 383),
        at(Dprefclk, 384),
        at(SmuBusy, 385),
        at(SmuSkipCounter, 387),
    ],
};
